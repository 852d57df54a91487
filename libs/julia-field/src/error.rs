//! # Field Errors
//!
//! Error types for field generation.

use thiserror::Error;

/// Errors that can occur while generating a field.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    /// A parameter is outside its valid range.
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },
}

impl FieldError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }
}

/// Result type alias for field operations.
pub type FieldResult<T> = Result<T, FieldError>;
