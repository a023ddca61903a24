//! 2D point/vector value type.
//!
//! `add`, `normalize` and `rotate` mutate the receiver; everything else
//! returns a fresh value. Angles are in degrees throughout the crate.

use std::ops::{AddAssign, Neg, Sub};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector {
    pub x: f32,
    pub y: f32,
}

/// Converts degrees to radians.
pub fn rad(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

pub fn dot(a: Vector, b: Vector) -> f32 {
    a.x * b.x + a.y * b.y
}

pub fn magnitude(v: Vector) -> f32 {
    (v.x.powf(2.0) + v.y.powf(2.0)).sqrt()
}

/// Returns `a - b` without touching either argument.
pub fn subtract(a: Vector, b: Vector) -> Vector {
    Vector::new(a.x - b.x, a.y - b.y)
}

/// Unit normal of the segment running from `a` to `b`.
///
/// Same caller obligation as [`Vector::normalize`]: `a` and `b` must differ.
pub fn find_normal(a: Vector, b: Vector) -> Vector {
    let mut vec = subtract(b, a);
    vec.normalize();
    Vector::new(-vec.y, vec.x)
}

impl Vector {
    pub const fn new(x: f32, y: f32) -> Vector {
        Vector { x, y }
    }

    pub fn dot(&self, other: Vector) -> f32 {
        dot(*self, other)
    }

    pub fn magnitude(&self) -> f32 {
        magnitude(*self)
    }

    /// Scales this vector to unit length in place.
    ///
    /// A zero vector divides by a zero magnitude and comes out as NaN.
    /// Callers that may hold a zero vector must check `magnitude()` first.
    pub fn normalize(&mut self) {
        let mag = self.magnitude();
        self.x /= mag;
        self.y /= mag;
    }

    pub fn add(&mut self, other: Vector) {
        *self += other;
    }

    /// Rotates this vector about the origin by `angle` degrees.
    pub fn rotate(&mut self, angle: f32) {
        let (sin, cos) = rad(angle).sin_cos();
        let x = self.x * cos - self.y * sin;
        let y = self.x * sin + self.y * cos;
        self.x = x;
        self.y = y;
    }

    pub fn copy(&self) -> Vector {
        Vector::new(self.x, self.y)
    }

    pub fn dist(&self, other: Vector) -> f32 {
        magnitude(subtract(*self, other))
    }

    /// Perpendicular `(-y, x)`. Never yields a negative zero x component.
    pub fn perp(&self) -> Vector {
        let x = if self.y == 0.0 { 0.0 } else { -self.y };
        Vector::new(x, self.x)
    }
}

impl AddAssign for Vector {
    fn add_assign(&mut self, rhs: Vector) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        subtract(self, rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y)
    }
}

impl From<[f32; 2]> for Vector {
    fn from(v: [f32; 2]) -> Vector {
        Vector::new(v[0], v[1])
    }
}

impl From<(f32, f32)> for Vector {
    fn from((x, y): (f32, f32)) -> Vector {
        Vector::new(x, y)
    }
}

impl From<Vector> for [f32; 2] {
    fn from(v: Vector) -> [f32; 2] {
        [v.x, v.y]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-3
    }

    #[test]
    fn dot_product() {
        assert_eq!(dot(Vector::new(1.0, 2.0), Vector::new(3.0, 4.0)), 11.0);
        assert_eq!(Vector::new(1.0, 0.0).dot(Vector::new(0.0, 1.0)), 0.0);
    }

    #[test]
    fn magnitude_of_3_4_is_5() {
        assert_eq!(Vector::new(3.0, 4.0).magnitude(), 5.0);
    }

    #[test]
    fn normalize_scales_to_unit_length() {
        let mut v = Vector::new(3.0, 4.0);
        v.normalize();
        assert!(approx_eq(v.x, 0.6));
        assert!(approx_eq(v.y, 0.8));
    }

    #[test]
    fn normalize_zero_vector_is_nan() {
        let mut v = Vector::default();
        v.normalize();
        assert!(v.x.is_nan() && v.y.is_nan());
    }

    #[test]
    fn add_mutates_receiver() {
        let mut v = Vector::new(1.0, 1.0);
        v.add(Vector::new(2.0, -3.0));
        assert_eq!(v, Vector::new(3.0, -2.0));
    }

    #[test]
    fn rotate_quarter_turn() {
        let mut v = Vector::new(1.0, 0.0);
        v.rotate(90.0);
        assert!(approx_eq(v.x, 0.0));
        assert!(approx_eq(v.y, 1.0));
    }

    #[test]
    fn copy_is_independent() {
        let v = Vector::new(2.0, 5.0);
        let mut c = v.copy();
        c.add(Vector::new(1.0, 1.0));
        assert_eq!(v, Vector::new(2.0, 5.0));
        assert_eq!(c, Vector::new(3.0, 6.0));
    }

    #[test]
    fn subtract_does_not_mutate() {
        let a = Vector::new(5.0, 5.0);
        let b = Vector::new(2.0, 1.0);
        assert_eq!(subtract(a, b), Vector::new(3.0, 4.0));
        assert_eq!(a - b, Vector::new(3.0, 4.0));
        assert_eq!(a, Vector::new(5.0, 5.0));
    }

    #[test]
    fn dist_between_points() {
        assert_eq!(Vector::new(0.0, 0.0).dist(Vector::new(6.0, 8.0)), 10.0);
    }

    #[test]
    fn perp_avoids_negative_zero() {
        let p = Vector::new(4.0, 0.0).perp();
        assert!(p.x.is_sign_positive());
        assert_eq!(p, Vector::new(0.0, 4.0));
        assert_eq!(Vector::new(1.0, 2.0).perp(), Vector::new(-2.0, 1.0));
    }

    #[test]
    fn normal_of_horizontal_segment() {
        let n = find_normal(Vector::new(0.0, 0.0), Vector::new(10.0, 0.0));
        assert!(approx_eq(n.x, 0.0));
        assert!(approx_eq(n.y, 1.0));
    }

    #[test]
    fn array_conversions() {
        let v: Vector = [1.5, -2.0].into();
        let a: [f32; 2] = v.into();
        assert_eq!(a, [1.5, -2.0]);
    }
}
