//! # Fan Triangulation
//!
//! Strip-like faceting of a point sequence: triangle `i` is
//! `(i, i+1, (i+2) mod n)` for `i` in `0..n-1`.
//!
//! The result only describes a surface when consecutive points are
//! neighbours on a contour. A scattered edge cloud produces a valid but
//! geometrically meaningless mesh; [`FanMesh`] carries the input ordering so
//! callers can tell the two apart.

use crate::error::MeshResult;
use crate::mesh::Mesh;
use julia_types::{Lift, PointCloud, PointOrdering};
use tracing::{debug, warn};

/// Fan-triangulated cloud together with the ordering it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct FanMesh {
    pub mesh: Mesh,
    pub ordering: PointOrdering,
}

impl FanMesh {
    /// True when the input was a traced contour.
    #[inline]
    pub fn is_meaningful(&self) -> bool {
        self.ordering == PointOrdering::Ordered
    }
}

/// Fan-triangulates `cloud`; 2D points are placed at `z = 0`.
///
/// Clouds with fewer than two points yield vertices and no triangles. A
/// two-point cloud yields the single degenerate face `(0, 1, 0)`, which
/// [`Mesh::quality`] reports.
///
/// ```rust
/// use julia_mesh::fan_triangulate;
/// use julia_types::{Point2D, PointCloud, PointOrdering};
///
/// let square = vec![
///     Point2D::new(0.0, 0.0),
///     Point2D::new(1.0, 0.0),
///     Point2D::new(1.0, 1.0),
///     Point2D::new(0.0, 1.0),
/// ];
/// let fan = fan_triangulate(&PointCloud::new(square, PointOrdering::Ordered)).unwrap();
/// assert!(fan.is_meaningful());
/// assert_eq!(fan.mesh.triangles(), &[[0, 1, 2], [1, 2, 3], [2, 3, 0]]);
/// ```
pub fn fan_triangulate<P: Lift>(cloud: &PointCloud<P>) -> MeshResult<FanMesh> {
    let n = cloud.len();
    let mut mesh = Mesh::with_capacity(n, n.saturating_sub(1))?;
    for &p in cloud {
        mesh.add_vertex(p.to_point3());
    }
    if n >= 2 {
        let n = n as u32;
        for i in 0..n - 1 {
            mesh.add_triangle(i, i + 1, (i + 2) % n);
        }
    }

    if cloud.ordering() == PointOrdering::Unordered && mesh.triangle_count() > 0 {
        warn!(
            points = n,
            "fan triangulation of an unordered cloud does not describe a surface"
        );
    }
    debug!(
        points = n,
        triangles = mesh.triangle_count(),
        "fan triangulation built"
    );

    Ok(FanMesh {
        mesh,
        ordering: cloud.ordering(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use julia_types::{Point2D, Point3D};

    #[test]
    fn test_fan_wraps_last_index() {
        let points: Vec<_> = (0..5).map(|i| Point2D::new(i as f64, (i * i) as f64)).collect();
        let fan = fan_triangulate(&PointCloud::new(points, PointOrdering::Ordered)).unwrap();
        assert_eq!(fan.mesh.triangle_count(), 4);
        assert_eq!(fan.mesh.triangle(3), [3, 4, 0]);
        assert!(fan.mesh.vertices().iter().all(|v| v.z == 0.0));
    }

    #[test]
    fn test_unordered_cloud_is_not_meaningful() {
        let points = vec![Point2D::ZERO, Point2D::X, Point2D::Y, Point2D::ONE];
        let fan = fan_triangulate(&PointCloud::new(points, PointOrdering::Unordered)).unwrap();
        assert!(!fan.is_meaningful());
        assert_eq!(fan.mesh.triangle_count(), 3);
    }

    #[test]
    fn test_three_dimensional_points_keep_depth() {
        let points = vec![Point3D::Z, Point3D::X, Point3D::Y];
        let fan = fan_triangulate(&PointCloud::new(points, PointOrdering::Ordered)).unwrap();
        assert_eq!(fan.mesh.vertex(0), Point3D::Z);
        assert_eq!(fan.mesh.triangles(), &[[0, 1, 2], [1, 2, 0]]);
    }

    #[test]
    fn test_short_clouds_have_no_faces() {
        for n in 0..2 {
            let points = vec![Point2D::ZERO; n];
            let fan = fan_triangulate(&PointCloud::new(points, PointOrdering::Ordered)).unwrap();
            assert_eq!(fan.mesh.vertex_count(), n);
            assert_eq!(fan.mesh.triangle_count(), 0);
        }
    }

    #[test]
    fn test_two_points_give_one_degenerate_face() {
        let points = vec![Point2D::ZERO, Point2D::X];
        let fan = fan_triangulate(&PointCloud::new(points, PointOrdering::Ordered)).unwrap();
        assert_eq!(fan.mesh.triangles(), &[[0, 1, 0]]);
        let quality = fan.mesh.quality();
        assert_eq!(quality.degenerate_triangles, 1);
        assert_eq!(quality.invalid_indices, 0);
    }
}
