//! # Alpha Shape
//!
//! Reduces a cloud to the vertices of Delaunay triangles whose circumradius
//! is below `1 / alpha`.

use crate::delaunay::{lexicographic, triangulate};
use crate::error::{PerimeterError, PerimeterResult};
use config::constants::MIN_ALPHA_SHAPE_POINTS;
use julia_types::Point2D;
use tracing::debug;

/// Circumradius of triangle `abc` from its edge lengths.
///
/// Uses Heron's formula for the area; zero-area triangles have an infinite
/// circumradius.
///
/// # Example
///
/// ```rust
/// use julia_perimeter::circumradius;
/// use julia_types::Point2D;
///
/// let r = circumradius(Point2D::new(0.0, 0.0), Point2D::new(2.0, 0.0), Point2D::new(0.0, 2.0));
/// assert!((r - 2.0f64.sqrt()).abs() < 1e-12);
/// ```
pub fn circumradius(a: Point2D, b: Point2D, c: Point2D) -> f64 {
    let ab = a.distance(b);
    let bc = b.distance(c);
    let ca = c.distance(a);
    let s = (ab + bc + ca) / 2.0;
    let area = (s * (s - ab) * (s - bc) * (s - ca)).max(0.0).sqrt();
    if area > 0.0 {
        ab * bc * ca / (4.0 * area)
    } else {
        f64::INFINITY
    }
}

/// Unique endpoints of every edge belonging to a triangle with circumradius
/// `< 1 / alpha`, sorted lexicographically by `(x, y)`.
///
/// # Arguments
///
/// * `points` - At least four points
/// * `alpha` - Positive, finite shape parameter
pub fn alpha_shape(points: &[Point2D], alpha: f64) -> PerimeterResult<Vec<Point2D>> {
    if !alpha.is_finite() || alpha <= 0.0 {
        return Err(PerimeterError::invalid_argument(format!(
            "alpha must be positive and finite, got {alpha}"
        )));
    }
    if points.len() < MIN_ALPHA_SHAPE_POINTS {
        return Err(PerimeterError::invalid_argument(format!(
            "alpha shape requires at least {MIN_ALPHA_SHAPE_POINTS} points, got {}",
            points.len()
        )));
    }

    let limit = 1.0 / alpha;
    let triangles = triangulate(points);
    let mut kept: Vec<Point2D> = triangles
        .iter()
        .filter(|&&[a, b, c]| circumradius(points[a], points[b], points[c]) < limit)
        .flat_map(|triangle| triangle.iter().map(|&i| points[i]))
        .collect();
    kept.sort_by(lexicographic);
    kept.dedup();

    debug!(
        input = points.len(),
        triangles = triangles.len(),
        kept = kept.len(),
        alpha,
        "alpha shape computed"
    );
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn grid(n: usize, spacing: f64) -> Vec<Point2D> {
        (0..n * n)
            .map(|i| Point2D::new((i % n) as f64 * spacing, (i / n) as f64 * spacing))
            .collect()
    }

    #[test]
    fn test_circumradius_right_triangle() {
        let r = circumradius(Point2D::ZERO, Point2D::new(3.0, 0.0), Point2D::new(0.0, 4.0));
        assert_relative_eq!(r, 2.5, epsilon = 1e-12);
    }

    #[test]
    fn test_circumradius_degenerate_is_infinite() {
        let r = circumradius(Point2D::ZERO, Point2D::new(1.0, 1.0), Point2D::new(2.0, 2.0));
        assert!(r.is_infinite());
    }

    #[test]
    fn test_requires_four_points() {
        let points = [Point2D::ZERO, Point2D::X, Point2D::Y];
        assert!(matches!(
            alpha_shape(&points, 1.0),
            Err(PerimeterError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_alpha() {
        let points = grid(3, 1.0);
        assert!(alpha_shape(&points, 0.0).is_err());
        assert!(alpha_shape(&points, -1.0).is_err());
        assert!(alpha_shape(&points, f64::NAN).is_err());
    }

    #[test]
    fn test_small_triangles_keep_every_point() {
        // Unit cells: circumradius sqrt(2)/2 < 1/0.99999
        let points = grid(5, 1.0);
        let kept = alpha_shape(&points, 0.99999).unwrap();
        assert_eq!(kept.len(), 25);
    }

    #[test]
    fn test_large_alpha_discards_everything() {
        let points = grid(5, 1.0);
        assert!(alpha_shape(&points, 2.0).unwrap().is_empty());
    }

    #[test]
    fn test_output_is_sorted_and_unique() {
        let mut points = grid(4, 0.5);
        points.reverse();
        points.push(Point2D::new(0.5, 0.5));
        let kept = alpha_shape(&points, 1.0).unwrap();
        assert_eq!(kept.len(), 16);
        for pair in kept.windows(2) {
            assert_eq!(lexicographic(&pair[0], &pair[1]), std::cmp::Ordering::Less);
        }
    }

    #[test]
    fn test_refining_twice_does_not_grow() {
        let mut points = grid(6, 1.0);
        points.extend([Point2D::new(20.0, 20.0), Point2D::new(40.0, 3.0)]);
        let once = alpha_shape(&points, 0.5).unwrap();
        let twice = alpha_shape(&once, 0.5).unwrap();
        assert!(twice.len() <= once.len());
        assert_eq!(once.len(), 36);
    }
}
