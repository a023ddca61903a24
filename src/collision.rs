//! Overlap, containment and segment intersection queries.
//!
//! Shape-level overlap uses edge crossings plus a single-vertex
//! containment check, not the separating axis theorem. [`sat`] is
//! available separately for convex shapes.

use crate::error::{CollisionError, Result};
use crate::generate::{polygon, rect};
use crate::shape::Shape;
use crate::vector::Vector;

/// Solves the segment system for `p1-p2` against `p3-p4`. Returns the
/// denominator and the two numerators, so `r = nr / denom` is the
/// parameter along the first segment and `s = ns / denom` along the second.
fn segment_terms(p1: Vector, p2: Vector, p3: Vector, p4: Vector) -> (f32, f32, f32) {
    let denom = (p2.x - p1.x) * (p4.y - p3.y) - (p2.y - p1.y) * (p4.x - p3.x);
    let nr = (p3.x - p1.x) * (p4.y - p3.y) - (p3.y - p1.y) * (p4.x - p3.x);
    let ns = (p3.x - p1.x) * (p2.y - p1.y) - (p3.y - p1.y) * (p2.x - p1.x);
    (denom, nr, ns)
}

fn in_unit(t: f32) -> bool {
    (0.0..=1.0).contains(&t)
}

/// True if segment `p1-p2` touches segment `p3-p4`. Endpoints count.
///
/// Parallel segments only report a hit when both numerators are zero as
/// well, i.e. the supporting lines coincide. Whether the collinear
/// segments actually overlap is not checked.
pub fn line_line(p1: Vector, p2: Vector, p3: Vector, p4: Vector) -> bool {
    let (denom, nr, ns) = segment_terms(p1, p2, p3, p4);
    if denom == 0.0 {
        return nr == 0.0 && ns == 0.0;
    }
    in_unit(nr / denom) && in_unit(ns / denom)
}

/// Intersection point of two segments, interpolated along `p1-p2`.
/// Parallel segments have no single point and return `None`.
pub fn line_line_point(p1: Vector, p2: Vector, p3: Vector, p4: Vector) -> Option<Vector> {
    let (denom, nr, ns) = segment_terms(p1, p2, p3, p4);
    if denom == 0.0 {
        return None;
    }
    let (r, s) = (nr / denom, ns / denom);
    if !(in_unit(r) && in_unit(s)) {
        return None;
    }
    Some(Vector::new(p1.x + r * (p2.x - p1.x), p1.y + r * (p2.y - p1.y)))
}

fn non_empty(shape: &Shape) -> Result<()> {
    if shape.is_empty() {
        log::debug!("rejecting collision query on a shape with no vertices");
        return Err(CollisionError::EmptyShape);
    }
    Ok(())
}

fn contains_point(shape: &Shape, px: f32, py: f32) -> bool {
    let mut inside = false;
    for (vc, vn) in shape.edge_pairs() {
        if (vc.y > py) != (vn.y > py) && px < (vn.x - vc.x) * (py - vc.y) / (vn.y - vc.y) + vc.x {
            inside = !inside;
        }
    }
    inside
}

/// Ray-casting parity test. Points exactly on an edge or vertex may land
/// either way.
pub fn point_in_polygon(shape: &Shape, px: f32, py: f32) -> Result<bool> {
    non_empty(shape)?;
    Ok(contains_point(shape, px, py))
}

fn polygons_touch(a: &Shape, b: &Shape, check_containment: bool) -> bool {
    if check_containment {
        let first = b.vertices()[0];
        if contains_point(a, first.x, first.y) {
            log::trace!("first vertex {first:?} of b lies inside a");
            return true;
        }
    }
    for (a1, a2) in a.edge_pairs() {
        for (b1, b2) in b.edge_pairs() {
            if line_line(a1, a2, b1, b2) {
                log::trace!("edge {a1:?}-{a2:?} crosses {b1:?}-{b2:?}");
                return true;
            }
        }
    }
    false
}

/// True if any edge of `a` touches any edge of `b`, or (with
/// `check_containment`, the usual choice) if `b`'s first vertex lies inside `a`.
///
/// Containment is only probed one way and through one vertex: `b` fully
/// enclosing `a` is reported as no collision. Edges are compared with
/// [`line_line`], so two shapes with edges on a common line collide at any
/// distance along it.
pub fn polygon_polygon(a: &Shape, b: &Shape, check_containment: bool) -> Result<bool> {
    non_empty(a)?;
    non_empty(b)?;
    Ok(polygons_touch(a, b, check_containment))
}

fn project(shape: &Shape, axis: Vector) -> (f32, f32) {
    shape
        .vertices()
        .iter()
        .map(|v| axis.dot(*v))
        .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), d| (lo.min(d), hi.max(d)))
}

/// Separating axis test for convex shapes. Touching counts as overlap.
pub fn sat(a: &Shape, b: &Shape) -> Result<bool> {
    non_empty(a)?;
    non_empty(b)?;
    for axis in a.edges().into_iter().chain(b.edges()).map(|e| e.perp()) {
        let (min_a, max_a) = project(a, axis);
        let (min_b, max_b) = project(b, axis);
        if max_a < min_b || max_b < min_a {
            log::trace!("separating axis {axis:?}");
            return Ok(false);
        }
    }
    Ok(true)
}

/// Rectangle overlap, boundaries inclusive.
///
/// With both angles `None` this is a plain axis-aligned test. Otherwise
/// each rectangle is rotated about its own center (a missing angle means
/// zero) and the pair goes through [`polygon_polygon`]. On that path,
/// rectangles whose edges share a line (for example two unrotated
/// rectangles with equal `y`) collide at any distance.
#[allow(clippy::too_many_arguments)]
pub fn rect_rect(
    x1: f32,
    y1: f32,
    w1: f32,
    h1: f32,
    x2: f32,
    y2: f32,
    w2: f32,
    h2: f32,
    a1: Option<f32>,
    a2: Option<f32>,
) -> bool {
    if a1.is_none() && a2.is_none() {
        return x1 <= x2 + w2 && x1 + w1 >= x2 && y1 <= y2 + h2 && y1 + h1 >= y2;
    }
    let mut s1 = rect(x1, y1, w1, h1);
    let mut s2 = rect(x2, y2, w2, h2);
    s1.set_rotation_center(None);
    s2.set_rotation_center(None);
    s1.rotate(Some(a1.unwrap_or(0.0)));
    s2.rotate(Some(a2.unwrap_or(0.0)));
    polygons_touch(&s1, &s2, true)
}

/// Rectangle against circle. Tangency is not a collision.
pub fn rect_circle(x: f32, y: f32, w: f32, h: f32, cx: f32, cy: f32, cr: f32) -> bool {
    // Negative extents flip the bounds rather than panicking in `clamp`.
    let closest = Vector::new(
        cx.max(x.min(x + w)).min(x.max(x + w)),
        cy.max(y.min(y + h)).min(y.max(y + h)),
    );
    closest.dist(Vector::new(cx, cy)) < cr
}

fn rect_edges(x: f32, y: f32, w: f32, h: f32) -> [(Vector, Vector); 4] {
    let tl = Vector::new(x, y);
    let tr = Vector::new(x + w, y);
    let br = Vector::new(x + w, y + h);
    let bl = Vector::new(x, y + h);
    [(tl, bl), (tr, br), (tl, tr), (bl, br)]
}

/// True if segment `(x1, y1)-(x2, y2)` touches any rectangle edge. A
/// segment lying entirely inside the rectangle does not count.
#[allow(clippy::too_many_arguments)]
pub fn rect_line(x: f32, y: f32, w: f32, h: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> bool {
    let (p1, p2) = (Vector::new(x1, y1), Vector::new(x2, y2));
    rect_edges(x, y, w, h)
        .iter()
        .any(|&(e1, e2)| line_line(p1, p2, e1, e2))
}

/// Every point where the segment meets a rectangle edge, in left, right,
/// top, bottom edge order. A segment through a corner yields that corner
/// once per edge it meets.
#[allow(clippy::too_many_arguments)]
pub fn rect_line_points(
    x: f32,
    y: f32,
    w: f32,
    h: f32,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
) -> Vec<Vector> {
    let (p1, p2) = (Vector::new(x1, y1), Vector::new(x2, y2));
    rect_edges(x, y, w, h)
        .iter()
        .filter_map(|&(e1, e2)| line_line_point(p1, p2, e1, e2))
        .collect()
}

/// Axis-aligned point containment, boundaries inclusive.
pub fn rect_point(rx: f32, ry: f32, rw: f32, rh: f32, px: f32, py: f32) -> bool {
    px >= rx && px <= rx + rw && py >= ry && py <= ry + rh
}

/// Rectangle against the polygon built from `xs`/`ys`, with containment
/// checking on. A polygon edge on the same line as a rectangle edge
/// collides at any distance, as in [`polygon_polygon`].
pub fn rect_poly(rx: f32, ry: f32, rw: f32, rh: f32, xs: &[f32], ys: &[f32]) -> Result<bool> {
    let poly = polygon(xs, ys)?;
    polygon_polygon(&rect(rx, ry, rw, rh), &poly, true)
}

/// Circle against circle. Tangency is not a collision.
pub fn circle_circle(x1: f32, y1: f32, r1: f32, x2: f32, y2: f32, r2: f32) -> bool {
    Vector::new(x1, y1).dist(Vector::new(x2, y2)) < r1 + r2
}
