use thiserror::Error;

/// Caller contract violations rejected by shape builders and shape-level
/// collision tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CollisionError {
    #[error("polygon coordinate arrays differ in length ({xs} x values, {ys} y values)")]
    MismatchedCoordinates { xs: usize, ys: usize },

    #[error("shape has no vertices")]
    EmptyShape,
}

pub type Result<T> = std::result::Result<T, CollisionError>;
