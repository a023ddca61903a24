//! Shape generators.
//!
//! Every generator returns a fresh [`Shape`] with its center set from the
//! construction parameters, never recomputed from the vertices.

use crate::error::{CollisionError, Result};
use crate::shape::Shape;
use crate::vector::{rad, Vector};

/// Vertex count used for circle and ellipse approximations.
pub const DEFAULT_RESOLUTION: usize = 64;

/// Rectangle anchored at its top-left corner `(x, y)`.
pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Shape {
    Shape::with_center(
        vec![
            Vector::new(x, y),
            Vector::new(x + w, y),
            Vector::new(x + w, y + h),
            Vector::new(x, y + h),
        ],
        Vector::new(x + w / 2.0, y + h / 2.0),
    )
}

/// Rectangle centered on `(cx, cy)`, same winding as [`rect`].
pub fn rect_centered(cx: f32, cy: f32, w: f32, h: f32) -> Shape {
    let (w2, h2) = (w / 2.0, h / 2.0);
    Shape::with_center(
        vec![
            Vector::new(cx - w2, cy - h2),
            Vector::new(cx + w2, cy - h2),
            Vector::new(cx + w2, cy + h2),
            Vector::new(cx - w2, cy + h2),
        ],
        Vector::new(cx, cy),
    )
}

/// Regular `resolution`-gon inscribed in the circle of radius `r`.
pub fn circle(cx: f32, cy: f32, r: f32, resolution: usize) -> Shape {
    ellipse(cx, cy, r * 2.0, r * 2.0, resolution)
}

/// `resolution`-gon approximating the ellipse with full width `w` and
/// height `h`. A resolution of zero yields an empty shape.
pub fn ellipse(cx: f32, cy: f32, w: f32, h: f32, resolution: usize) -> Shape {
    let step = 360.0 / resolution as f32;
    let (hw, hh) = (w / 2.0, h / 2.0);
    let vertices = (0..resolution)
        .map(|i| {
            let (sin, cos) = rad(i as f32 * step).sin_cos();
            Vector::new(cx + hw * cos, cy + hh * sin)
        })
        .collect();
    Shape::with_center(vertices, Vector::new(cx, cy))
}

/// Polygon from paired coordinate arrays.
///
/// The center is left at the origin, so the default pivot is `(0, 0)`.
/// Call `set_rotation_center(Some(..))` before rotating about anything else.
pub fn polygon(xs: &[f32], ys: &[f32]) -> Result<Shape> {
    if xs.len() != ys.len() {
        log::debug!("rejecting polygon: {} xs vs {} ys", xs.len(), ys.len());
        return Err(CollisionError::MismatchedCoordinates {
            xs: xs.len(),
            ys: ys.len(),
        });
    }
    Ok(xs.iter().zip(ys).map(|(&x, &y)| Vector::new(x, y)).collect())
}

/// Polygon owning copies of `vectors`.
///
/// As with [`polygon`], the center stays at the origin; set a rotation
/// center explicitly before rotating.
pub fn polygon_from_vectors(vectors: &[Vector]) -> Shape {
    vectors.iter().map(Vector::copy).collect()
}

/// Isosceles triangle with its base along `y` and apex at `y + height`.
pub fn triangle(x: f32, y: f32, base: f32, height: f32) -> Shape {
    Shape::with_center(
        vec![
            Vector::new(x, y),
            Vector::new(x + base, y),
            Vector::new(x + base / 2.0, y + height),
        ],
        Vector::new(x + base / 2.0, y + height / 2.0),
    )
}
