//! # Grid Extrusion
//!
//! Treats a field as a height map over the square `[-1, 1]²`.
//!
//! Vertex `(i, j)` (column, row) sits at index `i + j·width` with
//! `z = intensity / 255 · scale`. Every grid cell emits two triangles,
//! columns in the outer loop and rows in the inner loop.

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::MAX_INTENSITY;
use glam::DVec3;
use julia_types::ScalarField;
use tracing::info;

/// `n` evenly spaced samples over `[-1, 1]`.
#[inline]
fn unit_span(index: usize, n: usize) -> f64 {
    -1.0 + 2.0 * index as f64 / (n - 1) as f64
}

/// Builds a height-map surface from `field`.
///
/// # Arguments
///
/// * `field` - Height field, at least 2×2
/// * `scale` - Height of a full-intensity sample
///
/// # Returns
///
/// A mesh with `width·height` vertices and `2·(width−1)·(height−1)` triangles.
///
/// # Example
///
/// ```rust
/// use julia_mesh::grid_extrusion;
/// use julia_types::ScalarField;
///
/// let field = ScalarField::filled(4, 3, 255);
/// let mesh = grid_extrusion(&field, 10.0).unwrap();
/// assert_eq!(mesh.vertex_count(), 12);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn grid_extrusion(field: &ScalarField, scale: f64) -> MeshResult<Mesh> {
    let (width, height) = (field.width(), field.height());
    if width < 2 || height < 2 {
        return Err(MeshError::invalid_dimension(format!(
            "grid extrusion requires at least 2x2 samples, got {width}x{height}"
        )));
    }
    if !scale.is_finite() {
        return Err(MeshError::invalid_parameter(format!(
            "height scale must be finite, got {scale}"
        )));
    }

    let mut mesh = Mesh::with_capacity(width * height, 2 * (width - 1) * (height - 1))?;
    for j in 0..height {
        let y = unit_span(j, height);
        for (i, &value) in field.row(j).iter().enumerate() {
            let z = f64::from(value) / f64::from(MAX_INTENSITY) * scale;
            mesh.add_vertex(DVec3::new(unit_span(i, width), y, z));
        }
    }

    let w = width as u32;
    for i in 0..w - 1 {
        for j in 0..height as u32 - 1 {
            let idx = i + j * w;
            mesh.add_triangle(idx, idx + 1, idx + w);
            mesh.add_triangle(idx + 1, idx + w + 1, idx + w);
        }
    }

    info!(
        width,
        height,
        scale,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "grid extrusion built"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_counts() {
        let field = ScalarField::filled(5, 7, 0);
        let mesh = grid_extrusion(&field, 10.0).unwrap();
        assert_eq!(mesh.vertex_count(), 35);
        assert_eq!(mesh.triangle_count(), 2 * 4 * 6);
        assert!(mesh.quality().is_valid());
    }

    #[test]
    fn test_vertex_positions() {
        let field = ScalarField::from_raw(3, 2, vec![0, 51, 102, 153, 204, 255]).unwrap();
        let mesh = grid_extrusion(&field, 10.0).unwrap();
        assert_eq!(mesh.vertex(0), DVec3::new(-1.0, -1.0, 0.0));
        assert_relative_eq!(mesh.vertex(1).x, 0.0);
        assert_relative_eq!(mesh.vertex(1).z, 2.0, epsilon = 1e-12);
        assert_relative_eq!(mesh.vertex(5).x, 1.0);
        assert_relative_eq!(mesh.vertex(5).y, 1.0);
        assert_relative_eq!(mesh.vertex(5).z, 10.0);
        assert_relative_eq!(mesh.vertex(3).z, 6.0, epsilon = 1e-12);
    }

    #[test]
    fn test_face_order_is_column_major() {
        let field = ScalarField::filled(3, 3, 0);
        let mesh = grid_extrusion(&field, 1.0).unwrap();
        // (i, j) = (0, 0), (0, 1), (1, 0), (1, 1)
        assert_eq!(mesh.triangle(0), [0, 1, 3]);
        assert_eq!(mesh.triangle(1), [1, 4, 3]);
        assert_eq!(mesh.triangle(2), [3, 4, 6]);
        assert_eq!(mesh.triangle(4), [1, 2, 4]);
    }

    #[test]
    fn test_rejects_thin_fields() {
        for (w, h) in [(1, 5), (5, 1), (0, 0)] {
            let field = ScalarField::filled(w, h, 0);
            assert!(matches!(
                grid_extrusion(&field, 1.0),
                Err(MeshError::InvalidDimension { .. })
            ));
        }
    }

    #[test]
    fn test_rejects_non_finite_scale() {
        let field = ScalarField::filled(2, 2, 0);
        assert!(grid_extrusion(&field, f64::NAN).is_err());
    }
}
