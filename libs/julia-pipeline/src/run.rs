//! # Pipeline Run
//!
//! ```text
//! generate ─→ [field_image]
//!    │
//!    ├─ extract ─→ [boundary_stl (fan), boundary_ply]
//!    │     └─ refine (in memory or re-read PLY) ─→ [perimeter_ply]
//!    ├─ grid_extrusion | revolution ─→ [mesh_stl]
//!    └─ stack_layers (independent of the field above) ─→ [stack_ply]
//! ```
//!
//! Bracketed outputs are written only when their path is configured.

use std::path::PathBuf;

use julia_boundary::extract;
use julia_field::generate;
use julia_io::{read_ply_points, save_field_png, write_ply, write_stl};
use julia_mesh::{fan_triangulate, grid_extrusion, revolution, stack_layers};
use julia_perimeter::refine;
use julia_types::{Point2D, PointCloud, PointOrdering};
use serde::Serialize;
use tracing::{info, info_span, warn};

use crate::config::{MeshMode, PipelineConfig};
use crate::error::PipelineResult;

/// Sizes produced by each stage of a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PipelineReport {
    /// Field dimensions `(width, height)`
    pub field_size: (usize, usize),
    pub boundary_points: usize,
    pub boundary_ordering: Option<PointOrdering>,
    /// Set when refinement ran
    pub perimeter_points: Option<usize>,
    pub perimeter_ordering: Option<PointOrdering>,
    /// `(vertices, triangles)` when a mesh was built
    pub mesh_size: Option<(usize, usize)>,
    pub degenerate_triangles: usize,
    /// Set when the layer stack ran
    pub stacked_points: Option<usize>,
    /// Every file written, in order
    pub written: Vec<PathBuf>,
}

/// Runs every configured stage in order.
///
/// # Errors
///
/// The first failing stage aborts the run; files already written stay on
/// disk.
pub fn run(config: &PipelineConfig) -> PipelineResult<PipelineReport> {
    let _span = info_span!("pipeline").entered();
    let outputs = &config.outputs;
    let mut report = PipelineReport::default();

    let field = generate(&config.field)?;
    report.field_size = (field.width(), field.height());
    if let Some(path) = &outputs.field_image {
        save_field_png(&field, path)?;
        report.written.push(path.clone());
    }

    let boundary = extract(&field, &config.boundary);
    report.boundary_points = boundary.len();
    report.boundary_ordering = Some(boundary.ordering());

    if let Some(path) = &outputs.boundary_stl {
        let fan = fan_triangulate(&boundary)?;
        if !fan.is_meaningful() {
            warn!(path = %path.display(), "boundary STL is a fan over unordered points");
        }
        write_stl(&fan.mesh, path, config.stl_format)?;
        report.written.push(path.clone());
    }
    if let Some(path) = &outputs.boundary_ply {
        write_ply(&boundary, path)?;
        report.written.push(path.clone());
    }

    if let Some(strategy) = &config.refine {
        let source = match (&outputs.boundary_ply, config.reread_boundary) {
            (Some(path), true) => {
                let points = read_ply_points(path)?
                    .into_iter()
                    .map(|p| p.truncate())
                    .collect::<Vec<Point2D>>();
                PointCloud::new(points, boundary.ordering())
            }
            (None, true) => {
                warn!("reread_boundary is set without a boundary PLY path, refining in memory");
                boundary
            }
            _ => boundary,
        };
        let perimeter = refine(&source, strategy)?;
        report.perimeter_points = Some(perimeter.len());
        report.perimeter_ordering = Some(perimeter.ordering());
        if let Some(path) = &outputs.perimeter_ply {
            write_ply(&perimeter, path)?;
            report.written.push(path.clone());
        }
    }

    if let Some(mode) = &config.mesh {
        let mesh = match *mode {
            MeshMode::Grid { scale } => grid_extrusion(&field, scale)?,
            MeshMode::Revolution(params) => revolution(&field, &params)?,
        };
        report.mesh_size = Some((mesh.vertex_count(), mesh.triangle_count()));
        report.degenerate_triangles = mesh.quality().degenerate_triangles;
        if let Some(path) = &outputs.mesh_stl {
            write_stl(&mesh, path, config.stl_format)?;
            report.written.push(path.clone());
        }
    }

    if let Some(params) = &config.stack {
        let stacked = stack_layers(params)?;
        report.stacked_points = Some(stacked.len());
        if let Some(path) = &outputs.stack_ply {
            write_ply(&stacked, path)?;
            report.written.push(path.clone());
        }
    }

    info!(
        boundary = report.boundary_points,
        perimeter = ?report.perimeter_points,
        mesh = ?report.mesh_size,
        stacked = ?report.stacked_points,
        files = report.written.len(),
        "pipeline complete"
    );
    Ok(report)
}
