use thiserror::Error;

/// Errors that stop a render before any ray is traced.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image width must be a positive number of pixels")]
    InvalidWidth,

    #[error("failed to build render thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
