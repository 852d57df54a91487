//! # Revolution
//!
//! Sweeps a radial profile around the Z axis to build a closed tube.
//!
//! ## Algorithm
//!
//! 1. The profile is the field's centre column (`x = width / 2`), with
//!    `radius[i] = intensity[i] / 255`
//! 2. Ring `i` sits at `z = i · z_spacing` with `steps` vertices at
//!    `θ_k = 2πk / steps`; there is no duplicated seam vertex
//! 3. Each quad between rings `i` and `i + 1` splits into two triangles,
//!    with `k + 1` wrapping to `0` at the seam
//! 4. Optional end caps fan each end ring to a vertex on the axis

use crate::error::{MeshError, MeshResult};
use crate::mesh::Mesh;
use config::constants::{DEFAULT_REVOLUTION_STEPS, MAX_INTENSITY, MIN_REVOLUTION_STEPS};
use glam::DVec3;
use julia_types::ScalarField;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;
use tracing::{info, warn};

/// Parameters for [`revolution`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RevolutionParams {
    /// Angular subdivisions per ring
    pub steps: u32,
    /// Distance between consecutive rings along Z
    pub z_spacing: f64,
    /// Close both ends with a triangle fan
    pub cap_ends: bool,
}

impl Default for RevolutionParams {
    fn default() -> Self {
        Self {
            steps: DEFAULT_REVOLUTION_STEPS,
            z_spacing: 1.0,
            cap_ends: false,
        }
    }
}

/// Revolves the centre column of `field` around the Z axis.
///
/// # Arguments
///
/// * `field` - Profile source, at least 1 column and 2 rows
/// * `params` - Subdivision, ring spacing and capping
///
/// # Returns
///
/// `H·S` ring vertices and `2·(H−1)·S` side triangles, plus two axis
/// vertices and `2·S` cap triangles when `cap_ends` is set.
///
/// # Example
///
/// ```rust
/// use julia_mesh::{revolution, RevolutionParams};
/// use julia_types::ScalarField;
///
/// let field = ScalarField::filled(3, 10, 200);
/// let params = RevolutionParams { steps: 8, ..Default::default() };
/// let mesh = revolution(&field, &params).unwrap();
/// assert_eq!(mesh.vertex_count(), 80);
/// assert_eq!(mesh.triangle_count(), 144);
/// ```
pub fn revolution(field: &ScalarField, params: &RevolutionParams) -> MeshResult<Mesh> {
    let (width, height) = (field.width(), field.height());
    if width == 0 || height < 2 {
        return Err(MeshError::invalid_dimension(format!(
            "revolution requires at least 1 column and 2 rows, got {width}x{height}"
        )));
    }
    if params.steps < MIN_REVOLUTION_STEPS {
        return Err(MeshError::invalid_dimension(format!(
            "revolution requires at least {MIN_REVOLUTION_STEPS} steps, got {}",
            params.steps
        )));
    }
    if !params.z_spacing.is_finite() {
        return Err(MeshError::invalid_parameter(format!(
            "z spacing must be finite, got {}",
            params.z_spacing
        )));
    }

    let steps = params.steps as usize;
    let ring_vertices = height * steps;
    let caps = usize::from(params.cap_ends);
    let mut mesh = Mesh::with_capacity(ring_vertices + 2 * caps, 2 * height * steps)?;

    let angles: Vec<(f64, f64)> = (0..steps)
        .map(|k| (TAU * k as f64 / steps as f64).sin_cos())
        .collect();
    let profile = field.column(width / 2);
    for (i, &value) in profile.iter().enumerate() {
        let radius = f64::from(value) / f64::from(MAX_INTENSITY);
        let z = i as f64 * params.z_spacing;
        for &(sin, cos) in &angles {
            mesh.add_vertex(DVec3::new(radius * cos, radius * sin, z));
        }
    }

    let s = steps as u32;
    for i in 0..height as u32 - 1 {
        for j in 0..s {
            let next = (j + 1) % s;
            let idx = i * s + j;
            let across = (i + 1) * s + next;
            mesh.add_triangle(idx, idx + s, across);
            mesh.add_triangle(idx, across, i * s + next);
        }
    }

    if params.cap_ends {
        let top_ring = (height as u32 - 1) * s;
        let bottom = mesh.add_vertex(DVec3::ZERO);
        let top = mesh.add_vertex(DVec3::new(
            0.0,
            0.0,
            (height - 1) as f64 * params.z_spacing,
        ));
        for j in 0..s {
            let next = (j + 1) % s;
            mesh.add_triangle(bottom, j, next);
            mesh.add_triangle(top, top_ring + next, top_ring + j);
        }
    }

    let quality = mesh.quality();
    if quality.degenerate_triangles > 0 {
        warn!(
            degenerate = quality.degenerate_triangles,
            "revolution profile touches the axis"
        );
    }
    info!(
        height,
        steps,
        cap_ends = params.cap_ends,
        vertices = mesh.vertex_count(),
        triangles = mesh.triangle_count(),
        "revolution built"
    );
    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(steps: u32, cap_ends: bool) -> RevolutionParams {
        RevolutionParams {
            steps,
            z_spacing: 1.0,
            cap_ends,
        }
    }

    #[test]
    fn test_seam_wraps_with_four_steps() {
        let field = ScalarField::filled(1, 2, 255);
        let mesh = revolution(&field, &params(4, false)).unwrap();
        assert_eq!(mesh.vertex_count(), 8);
        assert_eq!(
            mesh.triangles(),
            &[
                [0, 4, 5],
                [0, 5, 1],
                [1, 5, 6],
                [1, 6, 2],
                [2, 6, 7],
                [2, 7, 3],
                [3, 7, 4],
                [3, 4, 0],
            ]
        );
        assert!(mesh.quality().is_valid());
    }

    #[test]
    fn test_ring_positions() {
        let field = ScalarField::filled(1, 2, 255);
        let mesh = revolution(&field, &params(4, false)).unwrap();
        let expected = [(1.0, 0.0), (0.0, 1.0), (-1.0, 0.0), (0.0, -1.0)];
        for (k, (x, y)) in expected.into_iter().enumerate() {
            let v = mesh.vertex(k as u32 + 4);
            assert_relative_eq!(v.x, x, epsilon = 1e-12);
            assert_relative_eq!(v.y, y, epsilon = 1e-12);
            assert_relative_eq!(v.z, 1.0);
        }
    }

    #[test]
    fn test_every_edge_is_shared_by_two_side_triangles() {
        use std::collections::HashMap;

        let field = ScalarField::filled(1, 3, 128);
        let mesh = revolution(&field, &params(5, true)).unwrap();
        let mut edges: HashMap<(u32, u32), usize> = HashMap::new();
        for tri in mesh.triangles() {
            for k in 0..3 {
                let (a, b) = (tri[k], tri[(k + 1) % 3]);
                *edges.entry((a.min(b), a.max(b))).or_default() += 1;
            }
        }
        // Capped tube is closed
        assert!(edges.values().all(|&n| n == 2));
    }

    #[test]
    fn test_profile_comes_from_centre_column() {
        let mut data = vec![0u8; 5 * 3];
        for row in 0..3 {
            data[row * 5 + 2] = 255;
        }
        let field = ScalarField::from_raw(5, 3, data).unwrap();
        let mesh = revolution(&field, &params(6, false)).unwrap();
        assert!(mesh
            .vertices()
            .iter()
            .all(|v| (v.truncate().length() - 1.0).abs() < 1e-12));
    }

    #[test]
    fn test_cap_counts() {
        let field = ScalarField::filled(4, 3, 100);
        let mesh = revolution(&field, &params(5, true)).unwrap();
        assert_eq!(mesh.vertex_count(), 3 * 5 + 2);
        assert_eq!(mesh.triangle_count(), 2 * 3 * 5);
        assert_eq!(mesh.vertex(16), DVec3::new(0.0, 0.0, 2.0));
    }

    #[test]
    fn test_z_spacing() {
        let field = ScalarField::filled(1, 4, 10);
        let p = RevolutionParams {
            steps: 3,
            z_spacing: 0.5,
            cap_ends: false,
        };
        let mesh = revolution(&field, &p).unwrap();
        let (min, max) = mesh.bounding_box();
        assert_relative_eq!(min.z, 0.0);
        assert_relative_eq!(max.z, 1.5);
    }

    #[test]
    fn test_rejects_small_inputs() {
        let tall = ScalarField::filled(3, 3, 10);
        assert!(matches!(
            revolution(&tall, &params(2, false)),
            Err(MeshError::InvalidDimension { .. })
        ));
        let flat = ScalarField::filled(3, 1, 10);
        assert!(matches!(
            revolution(&flat, &params(8, false)),
            Err(MeshError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_zero_radius_rows_are_degenerate() {
        let field = ScalarField::filled(1, 3, 0);
        let mesh = revolution(&field, &params(4, false)).unwrap();
        assert_eq!(mesh.quality().degenerate_triangles, mesh.triangle_count());
    }
}
