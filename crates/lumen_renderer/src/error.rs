//! Render errors.

use thiserror::Error;

/// Errors that stop a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),

    #[error("failed to start worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("worker panicked while rendering row {row}")]
    RowFailed { row: usize },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
