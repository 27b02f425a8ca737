use thiserror::Error;

/// Errors raised while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("sphere radius must be positive and finite, got {0}")]
    InvalidRadius(f64),

    #[error("plane normal must have non-zero length")]
    DegenerateNormal,

    #[error("material {name} coefficient must be within [0, 1], got {value}")]
    CoefficientOutOfRange { name: &'static str, value: f64 },
}

/// Result type for scene construction.
pub type SceneResult<T> = Result<T, SceneError>;
