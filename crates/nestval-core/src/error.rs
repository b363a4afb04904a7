//! Error types for nestval operations.

use thiserror::Error;

/// Errors returned by the few fallible nestval entry points.
#[derive(Error, Debug)]
pub enum NestvalError {
    /// The caller broke an operation's contract, e.g. asked `nested::set` to
    /// write into a root that is not a mapping.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias used throughout nestval-core.
pub type Result<T> = std::result::Result<T, NestvalError>;
