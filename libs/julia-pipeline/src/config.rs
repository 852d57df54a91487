//! # Run Configuration
//!
//! A [`PipelineConfig`] is plain data deserialised from JSON. Every field
//! has a default, so `{}` is a valid configuration that generates a field
//! and extracts its boundary without writing anything.
//!
//! ```json
//! {
//!   "field": { "width": 400, "height": 400, "max_iterations": 200 },
//!   "boundary": { "mode": "contour" },
//!   "refine": { "strategy": "clearance", "radius": 5.0 },
//!   "mesh": { "kind": "revolution", "steps": 64, "cap_ends": true },
//!   "outputs": { "mesh_stl": "vase.stl" }
//! }
//! ```

use std::path::{Path, PathBuf};

use config::constants::DEFAULT_HEIGHT_SCALE;
use julia_boundary::BoundaryMode;
use julia_field::FieldParameters;
use julia_io::{IoError, StlFormat};
use julia_mesh::{LayerStackParams, RevolutionParams};
use julia_perimeter::RefineStrategy;
use serde::{Deserialize, Serialize};

use crate::error::PipelineResult;

/// Mesh construction applied to the generated field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeshMode {
    /// Height map over `[-1, 1]²`.
    Grid {
        #[serde(default = "default_height_scale")]
        scale: f64,
    },
    /// Surface of revolution of the centre column.
    Revolution(RevolutionParams),
}

fn default_height_scale() -> f64 {
    DEFAULT_HEIGHT_SCALE
}

impl Default for MeshMode {
    fn default() -> Self {
        Self::Grid {
            scale: DEFAULT_HEIGHT_SCALE,
        }
    }
}

/// Files written by a run. Unset paths are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputPaths {
    /// Grayscale PNG of the field
    pub field_image: Option<PathBuf>,
    /// Fan-triangulated boundary cloud as STL
    pub boundary_stl: Option<PathBuf>,
    /// Boundary cloud as PLY
    pub boundary_ply: Option<PathBuf>,
    /// Refined perimeter as PLY
    pub perimeter_ply: Option<PathBuf>,
    /// Field mesh as STL
    pub mesh_stl: Option<PathBuf>,
    /// Layer stack cloud as PLY
    pub stack_ply: Option<PathBuf>,
}

impl OutputPaths {
    /// Every output under `dir` with the conventional file names.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            field_image: Some(dir.join("julia_set.png")),
            boundary_stl: Some(dir.join("julia_set_boundary.stl")),
            boundary_ply: Some(dir.join("julia_set_boundary.ply")),
            perimeter_ply: Some(dir.join("julia_set_perimeter.ply")),
            mesh_stl: Some(dir.join("julia_set.stl")),
            stack_ply: Some(dir.join("stacked_julia_sets.ply")),
        }
    }
}

/// Complete configuration of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    pub field: FieldParameters,
    pub boundary: BoundaryMode,
    /// Perimeter refinement; skipped when unset
    pub refine: Option<RefineStrategy>,
    /// Refine the points read back from `outputs.boundary_ply` rather than
    /// the in-memory cloud
    pub reread_boundary: bool,
    /// Field mesh; skipped when unset
    pub mesh: Option<MeshMode>,
    pub stl_format: StlFormat,
    /// Layer stack; skipped when unset
    pub stack: Option<LayerStackParams>,
    pub outputs: OutputPaths,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            field: FieldParameters::default(),
            boundary: BoundaryMode::default(),
            refine: Some(RefineStrategy::default()),
            reread_boundary: false,
            mesh: Some(MeshMode::default()),
            stl_format: StlFormat::default(),
            stack: None,
            outputs: OutputPaths::default(),
        }
    }
}

impl PipelineConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> PipelineResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> PipelineResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| IoError::on_open(path, e))?;
        Self::from_json(&text)
    }

    /// Pretty JSON rendering, as accepted by [`PipelineConfig::from_json`].
    pub fn to_json(&self) -> PipelineResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
