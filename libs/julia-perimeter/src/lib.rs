//! # Julia Perimeter
//!
//! Reduces a dense boundary cloud to a perimeter point set.
//!
//! ## Strategies
//!
//! | Strategy | Output order | Complexity |
//! |----------|--------------|------------|
//! | [`RefineStrategy::Alpha`] | lexicographic, unordered | Bowyer–Watson triangulation |
//! | [`RefineStrategy::Clearance`] | input order | grid-indexed neighbour counts |
//!
//! Both are pure functions of their input.
//!
//! ```rust
//! use julia_perimeter::{refine, RefineStrategy};
//! use julia_types::{Point2D, PointCloud, PointOrdering};
//!
//! let points = (0..16).map(|i| Point2D::new((i % 4) as f64, (i / 4) as f64)).collect();
//! let cloud = PointCloud::new(points, PointOrdering::Unordered);
//! let perimeter = refine(&cloud, &RefineStrategy::Clearance { radius: 1.5, neighbor_threshold: 8 }).unwrap();
//! // The four interior samples each see nine neighbours
//! assert_eq!(perimeter.len(), 12);
//! ```

pub mod alpha;
pub mod clearance;
pub mod delaunay;
pub mod error;

pub use alpha::{alpha_shape, circumradius};
pub use clearance::clearance_filter;
pub use delaunay::triangulate;
pub use error::{PerimeterError, PerimeterResult};

use config::constants::{
    DEFAULT_ALPHA, DEFAULT_CLEARANCE_RADIUS, DEFAULT_NEIGHBOR_THRESHOLD, MIN_ALPHA_SHAPE_POINTS,
};
use julia_types::{Point2D, PointCloud, PointOrdering};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Perimeter refinement strategy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum RefineStrategy {
    /// Keep vertices of Delaunay triangles with circumradius `< 1 / alpha`.
    Alpha {
        #[serde(default = "default_alpha")]
        alpha: f64,
    },
    /// Keep points with fewer than `neighbor_threshold` points within `radius`.
    Clearance {
        #[serde(default = "default_radius")]
        radius: f64,
        #[serde(default = "default_neighbor_threshold")]
        neighbor_threshold: usize,
    },
}

fn default_alpha() -> f64 {
    DEFAULT_ALPHA
}

fn default_radius() -> f64 {
    DEFAULT_CLEARANCE_RADIUS
}

fn default_neighbor_threshold() -> usize {
    DEFAULT_NEIGHBOR_THRESHOLD
}

impl Default for RefineStrategy {
    fn default() -> Self {
        Self::Alpha {
            alpha: DEFAULT_ALPHA,
        }
    }
}

/// Refines `cloud` with `strategy`.
///
/// An empty cloud refines to an empty cloud. Otherwise at least four points
/// are required.
///
/// # Errors
///
/// [`PerimeterError::InvalidArgument`] for 1–3 points or an out-of-range
/// strategy parameter.
pub fn refine(
    cloud: &PointCloud<Point2D>,
    strategy: &RefineStrategy,
) -> PerimeterResult<PointCloud<Point2D>> {
    if cloud.is_empty() {
        return Ok(PointCloud::empty(cloud.ordering()));
    }
    if cloud.len() < MIN_ALPHA_SHAPE_POINTS {
        return Err(PerimeterError::invalid_argument(format!(
            "perimeter refinement requires at least {MIN_ALPHA_SHAPE_POINTS} points, got {}",
            cloud.len()
        )));
    }

    let refined = match *strategy {
        RefineStrategy::Alpha { alpha } => {
            PointCloud::new(alpha_shape(cloud.points(), alpha)?, PointOrdering::Unordered)
        }
        RefineStrategy::Clearance {
            radius,
            neighbor_threshold,
        } => PointCloud::new(
            clearance_filter(cloud.points(), radius, neighbor_threshold)?,
            cloud.ordering(),
        ),
    };
    info!(
        input = cloud.len(),
        output = refined.len(),
        ?strategy,
        "refined perimeter"
    );
    Ok(refined)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(count: usize, radius: f64) -> Vec<Point2D> {
        (0..count)
            .map(|i| {
                let t = std::f64::consts::TAU * i as f64 / count as f64;
                Point2D::new(radius * t.cos(), radius * t.sin())
            })
            .collect()
    }

    #[test]
    fn test_empty_cloud_refines_to_empty() {
        let cloud = PointCloud::empty(PointOrdering::Ordered);
        for strategy in [
            RefineStrategy::default(),
            RefineStrategy::Clearance {
                radius: 5.0,
                neighbor_threshold: 8,
            },
        ] {
            let refined = refine(&cloud, &strategy).unwrap();
            assert!(refined.is_empty());
        }
    }

    #[test]
    fn test_three_points_are_rejected() {
        let cloud = PointCloud::new(ring(3, 1.0), PointOrdering::Ordered);
        assert!(matches!(
            refine(&cloud, &RefineStrategy::default()),
            Err(PerimeterError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_alpha_output_is_unordered() {
        let cloud = PointCloud::new(ring(40, 1.0), PointOrdering::Ordered);
        let refined = refine(&cloud, &RefineStrategy::Alpha { alpha: 0.5 }).unwrap();
        assert_eq!(refined.ordering(), PointOrdering::Unordered);
        assert!(refined.len() <= cloud.len());
    }

    #[test]
    fn test_clearance_keeps_ordering_flag() {
        let cloud = PointCloud::new(ring(12, 100.0), PointOrdering::Ordered);
        let refined = refine(
            &cloud,
            &RefineStrategy::Clearance {
                radius: 5.0,
                neighbor_threshold: 8,
            },
        )
        .unwrap();
        assert_eq!(refined.ordering(), PointOrdering::Ordered);
        assert_eq!(refined.points(), cloud.points());
    }

    #[test]
    fn test_alpha_idempotence_bound() {
        let mut points = ring(60, 10.0);
        points.extend(ring(30, 4.0));
        let cloud = PointCloud::new(points, PointOrdering::Unordered);
        let strategy = RefineStrategy::Alpha { alpha: 0.2 };
        let once = refine(&cloud, &strategy).unwrap();
        let twice = refine(&once, &strategy).unwrap();
        assert!(twice.len() <= once.len());
    }

    #[test]
    fn test_strategy_deserialises_with_defaults() {
        let strategy: RefineStrategy = serde_json::from_str(r#"{"strategy": "alpha"}"#).unwrap();
        assert_eq!(strategy, RefineStrategy::default());
        let strategy: RefineStrategy =
            serde_json::from_str(r#"{"strategy": "clearance", "radius": 2.0}"#).unwrap();
        assert_eq!(
            strategy,
            RefineStrategy::Clearance {
                radius: 2.0,
                neighbor_threshold: 8
            }
        );
    }
}
