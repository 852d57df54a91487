//! # Pipeline Errors

use julia_field::FieldError;
use julia_io::IoError;
use julia_mesh::MeshError;
use julia_perimeter::PerimeterError;
use thiserror::Error;

/// Errors raised by a pipeline run, one variant per failing stage.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] serde_json::Error),

    #[error(transparent)]
    Field(#[from] FieldError),

    #[error(transparent)]
    Perimeter(#[from] PerimeterError),

    #[error(transparent)]
    Mesh(#[from] MeshError),

    #[error(transparent)]
    Io(#[from] IoError),
}

/// Result type alias for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
