//! 2D collision detection for transformable polygons.
//!
//! Shapes are ordered vertex lists built by the generators in [`generate`];
//! [`collision`] answers "do these overlap", "is this point inside" and
//! "where do these segments cross". Rendering is left to the host, which
//! reads [`shape::Shape::vertices`] each frame.

pub mod collision;
pub mod error;
pub mod generate;
pub mod shape;
pub mod vector;

pub mod library {
    pub use crate::collision::*;
    pub use crate::error::CollisionError;
    pub use crate::generate::*;
    pub use crate::shape::Shape;
    pub use crate::vector::*;
}
