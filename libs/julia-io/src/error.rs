//! Error types for file adapters.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type for file adapters.
pub type IoResult<T> = Result<T, IoError>;

/// Errors that can occur while reading or writing files.
#[derive(Debug, Error)]
pub enum IoError {
    /// File not found.
    #[error("file not found: {path}")]
    FileNotFound {
        /// Path that was not found.
        path: PathBuf,
    },

    /// Invalid file content (parse error).
    #[error("invalid file content: {message}")]
    InvalidContent {
        /// Description of what was invalid.
        message: String,
    },

    /// Image encoding or decoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// I/O error from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IoError {
    /// Create an `InvalidContent` error with the given message.
    #[must_use]
    pub fn invalid_content(message: impl Into<String>) -> Self {
        Self::InvalidContent {
            message: message.into(),
        }
    }

    /// Maps a failed open of `path`, turning `NotFound` into [`IoError::FileNotFound`].
    pub fn on_open(path: &Path, error: std::io::Error) -> Self {
        if error.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::Io(error)
        }
    }
}
