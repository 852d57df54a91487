//! # Mesh Data Structure
//!
//! Indexed triangle mesh shared by every builder and the STL writer.

use crate::error::{MeshError, MeshResult};
use config::constants::{DEGENERATE_AREA_EPSILON, MAX_VERTICES};
use glam::DVec3;
use julia_types::Point3D;

/// A triangle mesh with vertices and indices.
///
/// # Example
///
/// ```rust
/// use julia_mesh::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.quality().is_valid());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    vertices: Vec<Point3D>,
    triangles: Vec<[u32; 3]>,
}

/// Outcome of [`Mesh::quality`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MeshQuality {
    /// Triangles referencing a vertex index out of range
    pub invalid_indices: usize,
    /// Triangles with repeated indices or near-zero area
    pub degenerate_triangles: usize,
}

impl MeshQuality {
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.invalid_indices == 0 && self.degenerate_triangles == 0
    }
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    ///
    /// Fails when `vertex_count` cannot be addressed with `u32` indices.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> MeshResult<Self> {
        if vertex_count > MAX_VERTICES {
            return Err(MeshError::TooManyVertices {
                count: vertex_count,
                max: MAX_VERTICES,
            });
        }
        Ok(Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
        })
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: Point3D) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    #[inline]
    pub fn vertices(&self) -> &[Point3D] {
        &self.vertices
    }

    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    #[inline]
    pub fn vertex(&self, index: u32) -> Point3D {
        self.vertices[index as usize]
    }

    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Corner positions of triangle `index`.
    #[inline]
    pub fn corners(&self, index: usize) -> [Point3D; 3] {
        self.triangles[index].map(|v| self.vertex(v))
    }

    /// Unit normal of triangle `index` by the right-hand rule, or zero when
    /// the triangle is degenerate.
    pub fn face_normal(&self, index: usize) -> DVec3 {
        let [v0, v1, v2] = self.corners(index);
        (v1 - v0).cross(v2 - v0).normalize_or_zero()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners, or zeros for an empty mesh.
    pub fn bounding_box(&self) -> (Point3D, Point3D) {
        let Some((first, rest)) = self.vertices.split_first() else {
            return (DVec3::ZERO, DVec3::ZERO);
        };
        rest.iter()
            .fold((*first, *first), |(min, max), v| (min.min(*v), max.max(*v)))
    }

    /// Merges another mesh into this one.
    pub fn merge(&mut self, other: &Mesh) {
        let offset = self.vertices.len() as u32;
        self.vertices.extend_from_slice(&other.vertices);
        self.triangles.extend(
            other
                .triangles
                .iter()
                .map(|tri| [tri[0] + offset, tri[1] + offset, tri[2] + offset]),
        );
    }

    /// Counts triangles with out-of-range indices and degenerate triangles.
    ///
    /// Degenerate means a repeated index or an area below
    /// `DEGENERATE_AREA_EPSILON`.
    pub fn quality(&self) -> MeshQuality {
        let vertex_count = self.vertices.len() as u32;
        let mut quality = MeshQuality::default();

        for tri in &self.triangles {
            if tri.iter().any(|&v| v >= vertex_count) {
                quality.invalid_indices += 1;
                continue;
            }
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                quality.degenerate_triangles += 1;
                continue;
            }
            let [v0, v1, v2] = tri.map(|v| self.vertices[v as usize]);
            let area = (v1 - v0).cross(v2 - v0).length() * 0.5;
            if area < DEGENERATE_AREA_EPSILON {
                quality.degenerate_triangles += 1;
            }
        }

        quality
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_triangle() -> Mesh {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::Y);
        mesh.add_triangle(0, 1, 2);
        mesh
    }

    #[test]
    fn test_mesh_new() {
        let mesh = Mesh::new();
        assert!(mesh.is_empty());
        assert_eq!(mesh.vertex_count(), 0);
        assert_eq!(mesh.triangle_count(), 0);
        assert_eq!(mesh.bounding_box(), (DVec3::ZERO, DVec3::ZERO));
    }

    #[test]
    fn test_mesh_add_vertex() {
        let mut mesh = Mesh::new();
        let idx = mesh.add_vertex(DVec3::new(1.0, 2.0, 3.0));
        assert_eq!(idx, 0);
        assert_eq!(mesh.vertex(0), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_face_normal() {
        let mesh = unit_triangle();
        assert_eq!(mesh.face_normal(0), DVec3::Z);
    }

    #[test]
    fn test_degenerate_face_normal_is_zero() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::ZERO);
        mesh.add_vertex(DVec3::X);
        mesh.add_vertex(DVec3::X * 2.0);
        mesh.add_triangle(0, 1, 2);
        assert_eq!(mesh.face_normal(0), DVec3::ZERO);
        assert_eq!(mesh.quality().degenerate_triangles, 1);
    }

    #[test]
    fn test_mesh_bounding_box() {
        let mut mesh = Mesh::new();
        mesh.add_vertex(DVec3::new(-1.0, -2.0, -3.0));
        mesh.add_vertex(DVec3::new(4.0, 5.0, 6.0));
        mesh.add_vertex(DVec3::new(0.0, 9.0, -7.0));
        let (min, max) = mesh.bounding_box();
        assert_eq!(min, DVec3::new(-1.0, -2.0, -7.0));
        assert_eq!(max, DVec3::new(4.0, 9.0, 6.0));
    }

    #[test]
    fn test_quality_counts_invalid_indices() {
        let mut mesh = unit_triangle();
        mesh.add_triangle(0, 1, 7);
        mesh.add_triangle(1, 1, 2);
        let quality = mesh.quality();
        assert_eq!(quality.invalid_indices, 1);
        assert_eq!(quality.degenerate_triangles, 1);
        assert!(!quality.is_valid());
    }

    #[test]
    fn test_mesh_merge() {
        let mut mesh1 = unit_triangle();
        let mut mesh2 = Mesh::new();
        mesh2.add_vertex(DVec3::Z);
        mesh2.add_vertex(DVec3::new(1.0, 0.0, 1.0));
        mesh2.add_vertex(DVec3::new(0.0, 1.0, 1.0));
        mesh2.add_triangle(0, 1, 2);

        mesh1.merge(&mesh2);
        assert_eq!(mesh1.vertex_count(), 6);
        assert_eq!(mesh1.triangle_count(), 2);
        assert_eq!(mesh1.triangle(1), [3, 4, 5]);
        assert!(mesh1.quality().is_valid());
    }

    #[test]
    fn test_capacity_limit() {
        assert!(matches!(
            Mesh::with_capacity(MAX_VERTICES + 1, 0),
            Err(MeshError::TooManyVertices { .. })
        ));
    }
}
