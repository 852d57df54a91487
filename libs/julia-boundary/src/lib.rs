//! # Julia Boundary
//!
//! Converts a [`ScalarField`] into a cloud of boundary points.
//!
//! ## Strategies
//!
//! - **Edge** ([`BoundaryMode::Edge`]): binarise, then run a hysteresis
//!   edge detector. Dense output in row-major scan order, unordered.
//! - **Contour** ([`BoundaryMode::Contour`]): binarise, then trace component
//!   borders with Suzuki–Abe border following. Per-contour point order is
//!   preserved, so the cloud is ordered.
//!
//! A field without foreground yields an empty cloud, never an error.
//!
//! ```rust
//! use julia_boundary::{extract, BoundaryMode};
//! use julia_types::{PointOrdering, ScalarField};
//!
//! // A dark 2x2 block in a bright 6x6 field.
//! let mut data = vec![255u8; 36];
//! for (x, y) in [(2, 2), (3, 2), (2, 3), (3, 3)] {
//!     data[y * 6 + x] = 0;
//! }
//! let field = ScalarField::from_raw(6, 6, data).unwrap();
//! let contour = extract(&field, &BoundaryMode::contour());
//! assert_eq!(contour.ordering(), PointOrdering::Ordered);
//! assert_eq!(contour.len(), 4);
//! ```

pub mod binary;
pub mod contour;
pub mod edge;

pub use binary::BinaryImage;
pub use contour::{
    find_contours, BorderKind, Contour, ContourApproximation, ContourRetrieval,
};
pub use edge::{detect_edges, EdgeThresholds};

use config::constants::{DEFAULT_EDGE_HIGH, DEFAULT_EDGE_LOW, DEFAULT_THRESHOLD};
use julia_types::{Point2D, PointCloud, PointOrdering, ScalarField};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Boundary extraction strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum BoundaryMode {
    /// Threshold, then hysteresis edge detection.
    Edge {
        #[serde(default = "default_cutoff")]
        cutoff: u8,
        #[serde(default = "default_low")]
        low: f64,
        #[serde(default = "default_high")]
        high: f64,
    },
    /// Threshold, then border following.
    Contour {
        #[serde(default = "default_cutoff")]
        cutoff: u8,
        #[serde(default)]
        retrieval: ContourRetrieval,
        #[serde(default)]
        approximation: ContourApproximation,
    },
}

fn default_cutoff() -> u8 {
    DEFAULT_THRESHOLD
}

fn default_low() -> f64 {
    DEFAULT_EDGE_LOW
}

fn default_high() -> f64 {
    DEFAULT_EDGE_HIGH
}

impl BoundaryMode {
    /// Edge mode with the legacy thresholds (cutoff 127, hysteresis 100/200).
    pub fn edge() -> Self {
        Self::Edge {
            cutoff: DEFAULT_THRESHOLD,
            low: DEFAULT_EDGE_LOW,
            high: DEFAULT_EDGE_HIGH,
        }
    }

    /// Contour mode tracing external borders with simple chain compression.
    pub fn contour() -> Self {
        Self::Contour {
            cutoff: DEFAULT_THRESHOLD,
            retrieval: ContourRetrieval::External,
            approximation: ContourApproximation::Simple,
        }
    }
}

impl Default for BoundaryMode {
    fn default() -> Self {
        Self::edge()
    }
}

/// Extracts boundary points from `field` with the given strategy.
pub fn extract(field: &ScalarField, mode: &BoundaryMode) -> PointCloud<Point2D> {
    let cloud = match *mode {
        BoundaryMode::Edge { cutoff, low, high } => {
            let binary = BinaryImage::threshold(field, cutoff);
            let edges = detect_edges(&binary, EdgeThresholds { low, high });
            PointCloud::new(edges, PointOrdering::Unordered)
        }
        BoundaryMode::Contour {
            cutoff,
            retrieval,
            approximation,
        } => {
            let binary = BinaryImage::threshold(field, cutoff);
            let contours = find_contours(&binary, retrieval, approximation);
            concatenate(&contours)
        }
    };
    info!(points = cloud.len(), ?mode, "extracted boundary points");
    cloud
}

/// Concatenates contours in order into one ordered cloud.
pub fn concatenate(contours: &[Contour]) -> PointCloud<Point2D> {
    let points = contours
        .iter()
        .flat_map(|contour| contour.points.iter().copied())
        .collect();
    PointCloud::new(points, PointOrdering::Ordered)
}
