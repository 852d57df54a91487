//! # Perimeter Errors

use thiserror::Error;

/// Errors raised while refining a perimeter.
#[derive(Debug, Error, PartialEq)]
pub enum PerimeterError {
    /// Input cloud or strategy parameter is unusable.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl PerimeterError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for perimeter operations.
pub type PerimeterResult<T> = Result<T, PerimeterError>;
