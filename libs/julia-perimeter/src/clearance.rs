//! # Clearance Filter
//!
//! Keeps points whose neighbourhood is sparse: a point survives when fewer
//! than `neighbor_threshold` points (itself included) lie strictly within
//! `radius`.
//!
//! Neighbour queries go through a uniform grid with cell size `radius`, so
//! only the 3×3 block of cells around a point is scanned. Counting is
//! parallel over points with rayon.

use crate::error::{PerimeterError, PerimeterResult};
use julia_types::Point2D;
use rayon::prelude::*;
use std::collections::HashMap;
use tracing::debug;

/// Uniform bucket grid over a point slice.
struct GridIndex<'a> {
    points: &'a [Point2D],
    cell: f64,
    buckets: HashMap<(i64, i64), Vec<usize>>,
}

impl<'a> GridIndex<'a> {
    fn new(points: &'a [Point2D], cell: f64) -> Self {
        let mut buckets: HashMap<(i64, i64), Vec<usize>> = HashMap::new();
        for (i, &p) in points.iter().enumerate() {
            buckets.entry(Self::key(p, cell)).or_default().push(i);
        }
        Self {
            points,
            cell,
            buckets,
        }
    }

    #[inline]
    fn key(p: Point2D, cell: f64) -> (i64, i64) {
        ((p.x / cell).floor() as i64, (p.y / cell).floor() as i64)
    }

    /// Number of points strictly closer than `radius` to `p`, stopping at `limit`.
    fn count_within(&self, p: Point2D, radius: f64, limit: usize) -> usize {
        let r2 = radius * radius;
        let (cx, cy) = Self::key(p, self.cell);
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                let Some(bucket) = self.buckets.get(&(cx + dx, cy + dy)) else {
                    continue;
                };
                for &i in bucket {
                    if self.points[i].distance_squared(p) < r2 {
                        count += 1;
                        if count >= limit {
                            return count;
                        }
                    }
                }
            }
        }
        count
    }
}

/// Filters `points` down to locally sparse samples, preserving input order.
///
/// ```rust
/// use julia_perimeter::clearance_filter;
/// use julia_types::Point2D;
///
/// let points = [Point2D::new(0.0, 0.0), Point2D::new(10.0, 0.0)];
/// let kept = clearance_filter(&points, 5.0, 2).unwrap();
/// assert_eq!(kept, points);
/// ```
pub fn clearance_filter(
    points: &[Point2D],
    radius: f64,
    neighbor_threshold: usize,
) -> PerimeterResult<Vec<Point2D>> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(PerimeterError::invalid_argument(format!(
            "clearance radius must be positive and finite, got {radius}"
        )));
    }
    if neighbor_threshold == 0 {
        return Err(PerimeterError::invalid_argument(
            "neighbor threshold must be at least 1",
        ));
    }

    let index = GridIndex::new(points, radius);
    let keep: Vec<bool> = points
        .par_iter()
        .map(|&p| index.count_within(p, radius, neighbor_threshold) < neighbor_threshold)
        .collect();
    let kept: Vec<Point2D> = points
        .iter()
        .zip(keep)
        .filter_map(|(&p, keep)| keep.then_some(p))
        .collect();

    debug!(
        input = points.len(),
        kept = kept.len(),
        radius,
        neighbor_threshold,
        "clearance filter applied"
    );
    Ok(kept)
}
