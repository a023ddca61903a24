//! Polygon model with rotation and base-pose snapshots.

use crate::vector::{subtract, Vector};

/// An implicitly closed polygon: edge `i` runs from `vertices[i]` to
/// `vertices[(i + 1) % n]`.
///
/// The vertices are the single source of truth. [`Shape::rotate`] moves
/// them in place, so rotating twice by the same angle rotates twice. Use
/// [`Shape::save`] once and [`Shape::load`] before every rotation to
/// apply an absolute angle instead:
///
/// ```
/// use rcollide::library::*;
///
/// let mut tri = triangle(0.0, 0.0, 10.0, 10.0);
/// tri.save();
/// for step in 0..4 {
///     tri.load();
///     tri.rotate(Some(step as f32 * 15.0));
/// }
/// assert_eq!(tri.rotation(), 45.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    vertices: Vec<Vector>,
    center: Vector,
    rotation_center: Option<Vector>,
    rotation: f32,
    base_pose: Vec<Vector>,
}

impl Shape {
    pub fn new() -> Shape {
        Shape::default()
    }

    pub(crate) fn with_center(vertices: Vec<Vector>, center: Vector) -> Shape {
        Shape {
            vertices,
            center,
            ..Shape::default()
        }
    }

    /// Appends a vertex, extending the winding.
    pub fn push(&mut self, vertex: Vector) {
        self.vertices.push(vertex);
    }

    pub fn vertices(&self) -> &[Vector] {
        &self.vertices
    }

    pub fn vertex(&self, n: usize) -> Option<&Vector> {
        self.vertices.get(n)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn center(&self) -> Vector {
        self.center
    }

    /// Pivot used by [`Shape::rotate`]. Falls back to the center until one
    /// is set explicitly.
    pub fn rotation_center(&self) -> Vector {
        self.rotation_center.unwrap_or(self.center)
    }

    /// Last angle passed to [`Shape::rotate`], in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation_center(&mut self, center: Option<Vector>) {
        self.rotation_center = Some(center.unwrap_or(self.center).copy());
    }

    /// Rotates every vertex about the rotation center.
    ///
    /// `None` re-applies the last angle, which compounds onto the current
    /// vertices.
    pub fn rotate(&mut self, angle: Option<f32>) {
        if let Some(angle) = angle {
            self.rotation = angle;
        }
        let pivot = self.rotation_center();
        for vertex in self.vertices.iter_mut() {
            let mut rot = subtract(*vertex, pivot);
            rot.rotate(self.rotation);
            rot.add(pivot);
            *vertex = rot;
        }
    }

    /// Snapshots the current vertices as the base pose.
    pub fn save(&mut self) {
        self.base_pose = self.vertices.clone();
    }

    /// Restores the base pose. Does nothing if nothing was saved.
    pub fn load(&mut self) {
        if self.base_pose.is_empty() {
            return;
        }
        self.vertices.clone_from(&self.base_pose);
    }

    /// Edge vectors `vertices[i + 1] - vertices[i]`, wrapping to the first
    /// vertex.
    pub fn edges(&self) -> Vec<Vector> {
        self.edge_pairs().map(|(a, b)| subtract(b, a)).collect()
    }

    /// Consecutive vertex pairs in winding order, including the closing edge.
    pub(crate) fn edge_pairs(&self) -> impl Iterator<Item = (Vector, Vector)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

impl FromIterator<Vector> for Shape {
    fn from_iter<I: IntoIterator<Item = Vector>>(iter: I) -> Shape {
        Shape::with_center(iter.into_iter().collect(), Vector::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: Vector, b: Vector) -> bool {
        (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
    }

    fn unit_square() -> Shape {
        Shape::with_center(
            vec![
                Vector::new(0.0, 0.0),
                Vector::new(2.0, 0.0),
                Vector::new(2.0, 2.0),
                Vector::new(0.0, 2.0),
            ],
            Vector::new(1.0, 1.0),
        )
    }

    #[test]
    fn rotation_center_defaults_to_center() {
        let s = unit_square();
        assert_eq!(s.rotation_center(), Vector::new(1.0, 1.0));
    }

    #[test]
    fn rotate_about_center() {
        let mut s = unit_square();
        s.rotate(Some(90.0));
        assert!(approx_eq(s.vertices()[0], Vector::new(2.0, 0.0)));
        assert!(approx_eq(s.vertices()[1], Vector::new(2.0, 2.0)));
        assert_eq!(s.rotation(), 90.0);
    }

    #[test]
    fn rotate_about_custom_pivot() {
        let mut s = unit_square();
        s.set_rotation_center(Some(Vector::new(0.0, 0.0)));
        s.rotate(Some(180.0));
        assert!(approx_eq(s.vertices()[2], Vector::new(-2.0, -2.0)));
    }

    #[test]
    fn set_rotation_center_none_copies_center() {
        let mut s = unit_square();
        s.set_rotation_center(Some(Vector::new(5.0, 5.0)));
        s.set_rotation_center(None);
        assert_eq!(s.rotation_center(), s.center());
    }

    // Re-rotating without an angle compounds; this is the documented behavior.
    #[test]
    fn rotate_without_angle_compounds() {
        let mut s = unit_square();
        s.rotate(Some(45.0));
        s.rotate(None);
        let mut expected = unit_square();
        expected.rotate(Some(90.0));
        for (a, b) in s.vertices().iter().zip(expected.vertices()) {
            assert!(approx_eq(*a, *b));
        }
        assert_eq!(s.rotation(), 45.0);
    }

    #[test]
    fn save_rotate_load_restores_exactly() {
        let mut s = unit_square();
        let before = s.vertices().to_vec();
        s.save();
        s.rotate(Some(45.0));
        s.load();
        assert_eq!(s.vertices(), &before[..]);
    }

    #[test]
    fn load_without_save_is_noop() {
        let mut s = unit_square();
        s.rotate(Some(30.0));
        let rotated = s.vertices().to_vec();
        s.load();
        assert_eq!(s.vertices(), &rotated[..]);
    }

    #[test]
    fn edges_wrap_around() {
        let s = unit_square();
        let edges = s.edges();
        assert_eq!(edges.len(), 4);
        assert_eq!(edges[0], Vector::new(2.0, 0.0));
        assert_eq!(edges[3], Vector::new(0.0, -2.0));
    }

    #[test]
    fn push_and_vertex_access() {
        let mut s = Shape::new();
        assert!(s.is_empty());
        s.push(Vector::new(1.0, 2.0));
        assert_eq!(s.len(), 1);
        assert_eq!(s.vertex(0), Some(&Vector::new(1.0, 2.0)));
        assert_eq!(s.vertex(1), None);
    }
}
