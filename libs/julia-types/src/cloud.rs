//! Ordered point sequences.

use crate::{Point2D, Point3D};
use serde::{Deserialize, Serialize};

/// Whether consecutive points of a cloud are neighbours along a contour.
///
/// Contour tracing yields [`PointOrdering::Ordered`] clouds; edge scans and
/// alpha-shape reductions yield [`PointOrdering::Unordered`] ones. Steps that
/// treat a cloud as a polygon (fan triangulation) are only meaningful for
/// ordered input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointOrdering {
    Ordered,
    Unordered,
}

/// An ordered sequence of points. Duplicates are kept.
///
/// # Example
///
/// ```rust
/// use julia_types::{Point2D, PointCloud, PointOrdering};
///
/// let cloud = PointCloud::new(
///     vec![Point2D::new(0.0, 0.0), Point2D::new(1.0, 0.0)],
///     PointOrdering::Ordered,
/// );
/// assert_eq!(cloud.len(), 2);
/// let lifted = cloud.lift(3.0);
/// assert_eq!(lifted.points()[1].z, 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloud<P> {
    points: Vec<P>,
    ordering: PointOrdering,
}

impl<P> PointCloud<P> {
    pub fn new(points: Vec<P>, ordering: PointOrdering) -> Self {
        Self { points, ordering }
    }

    /// An empty cloud.
    pub fn empty(ordering: PointOrdering) -> Self {
        Self::new(Vec::new(), ordering)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[P] {
        &self.points
    }

    pub fn into_points(self) -> Vec<P> {
        self.points
    }

    #[inline]
    pub fn ordering(&self) -> PointOrdering {
        self.ordering
    }

    pub fn iter(&self) -> std::slice::Iter<'_, P> {
        self.points.iter()
    }

    /// Appends another cloud. The result is only ordered if both are.
    pub fn append(&mut self, other: PointCloud<P>) {
        if other.ordering == PointOrdering::Unordered {
            self.ordering = PointOrdering::Unordered;
        }
        self.points.extend(other.points);
    }
}

impl PointCloud<Point2D> {
    /// Places every point on the plane `z = z`.
    pub fn lift(&self, z: f64) -> PointCloud<Point3D> {
        PointCloud::new(
            self.points.iter().map(|p| p.lift(z)).collect(),
            self.ordering,
        )
    }
}

impl<'a, P> IntoIterator for &'a PointCloud<P> {
    type Item = &'a P;
    type IntoIter = std::slice::Iter<'a, P>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Conversion of a point into model space.
///
/// 2D points land on the `z = 0` plane unless lifted explicitly.
pub trait Lift: Copy {
    /// Returns the point in model space at height `z` (ignored for 3D points).
    fn lift(self, z: f64) -> Point3D;

    /// Returns the point in model space with its natural height.
    fn to_point3(self) -> Point3D;
}

impl Lift for Point2D {
    #[inline]
    fn lift(self, z: f64) -> Point3D {
        self.extend(z)
    }

    #[inline]
    fn to_point3(self) -> Point3D {
        self.extend(0.0)
    }
}

impl Lift for Point3D {
    #[inline]
    fn lift(self, _z: f64) -> Point3D {
        self
    }

    #[inline]
    fn to_point3(self) -> Point3D {
        self
    }
}
