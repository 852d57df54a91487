//! # Julia Types
//!
//! Value types handed from one pipeline stage to the next:
//!
//! ```text
//! julia-field → ScalarField → julia-boundary → PointCloud<Point2D>
//!     → julia-perimeter → PointCloud<Point2D> → julia-mesh / julia-io
//! ```
//!
//! Every value is created fresh per run and is read-only once produced.

mod cloud;
mod field;

pub use cloud::{Lift, PointCloud, PointOrdering};
pub use field::ScalarField;

/// A point in the field plane (`x` = column, `y` = row).
pub type Point2D = glam::DVec2;

/// A point in model space.
pub type Point3D = glam::DVec3;
