//! # Julia Pipeline
//!
//! Wires the field, boundary, perimeter, mesh and file stages into one
//! configurable run.
//!
//! ## Usage
//!
//! ```rust
//! use julia_pipeline::{run, PipelineConfig};
//! use julia_field::FieldParameters;
//!
//! let config = PipelineConfig {
//!     field: FieldParameters { width: 48, height: 48, max_iterations: 40, ..Default::default() },
//!     ..Default::default()
//! };
//! let report = run(&config).unwrap();
//! assert_eq!(report.mesh_size, Some((48 * 48, 2 * 47 * 47)));
//! ```

pub mod config;
pub mod error;
pub mod run;

pub use config::{MeshMode, OutputPaths, PipelineConfig};
pub use error::{PipelineError, PipelineResult};
pub use run::{run, PipelineReport};
