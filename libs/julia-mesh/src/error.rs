//! # Mesh Errors
//!
//! Error types for mesh construction.

use julia_field::FieldError;
use thiserror::Error;

/// Errors that can occur while building a mesh.
#[derive(Debug, Error, PartialEq)]
pub enum MeshError {
    /// Field generation failed while building a layer
    #[error("Field error: {0}")]
    Field(#[from] FieldError),

    /// Input grid or subdivision too small
    #[error("Invalid dimension: {message}")]
    InvalidDimension { message: String },

    /// Non-finite or out-of-range build parameter
    #[error("Invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// Too many vertices for 32-bit indices
    #[error("Too many vertices: {count} (max: {max})")]
    TooManyVertices { count: usize, max: usize },
}

impl MeshError {
    /// Creates an invalid dimension error.
    pub fn invalid_dimension(message: impl Into<String>) -> Self {
        Self::InvalidDimension {
            message: message.into(),
        }
    }

    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }
}

/// Result type alias for mesh operations.
pub type MeshResult<T> = Result<T, MeshError>;
