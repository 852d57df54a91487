//! Centralized configuration values shared across the Julia pipeline crates.
//!
//! Each public item documents its purpose so that downstream crates can stay
//! declarative and avoid scattering literals.

// =============================================================================
// TOLERANCES
// =============================================================================

/// Area below which a mesh triangle is reported as degenerate by quality
/// checks.
pub const DEGENERATE_AREA_EPSILON: f64 = 1e-12;

// =============================================================================
// FIELD GENERATION
// =============================================================================

/// Maximum intensity of a scalar field sample.
pub const MAX_INTENSITY: u8 = 255;

/// Default iteration budget of the escape-time loop.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_MAX_ITERATIONS;
/// assert!(DEFAULT_MAX_ITERATIONS >= 1);
/// ```
pub const DEFAULT_MAX_ITERATIONS: u32 = 300;

/// Escape radius used with the asymmetric pixel mapping.
pub const ASYMMETRIC_ESCAPE_RADIUS: f64 = 4.0;

/// Escape radius used with the symmetric `[-1.5, 1.5]` pixel mapping.
pub const SYMMETRIC_ESCAPE_RADIUS: f64 = 2.0;

/// Horizontal scale of the asymmetric mapping.
pub const ASYMMETRIC_SCALE_X: f64 = 1.5;

/// Vertical scale of the asymmetric mapping.
pub const ASYMMETRIC_SCALE_Y: f64 = 1.0;

/// Scale on both axes of the symmetric mapping.
pub const SYMMETRIC_SCALE: f64 = 1.5;

/// Default zoom factor.
pub const DEFAULT_ZOOM: f64 = 1.0;

/// Default Julia constant `c = -0.7 + 0.27015i`, as `(re, im)`.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_JULIA_C;
/// let (re, im) = DEFAULT_JULIA_C;
/// assert!(re < 0.0 && im > 0.0);
/// ```
pub const DEFAULT_JULIA_C: (f64, f64) = (-0.7, 0.27015);

/// Default field width and height in samples.
pub const DEFAULT_FIELD_SIZE: usize = 800;

// =============================================================================
// BOUNDARY EXTRACTION
// =============================================================================

/// Binarisation cutoff. Samples with `intensity <= DEFAULT_THRESHOLD` are
/// foreground.
pub const DEFAULT_THRESHOLD: u8 = 127;

/// Low hysteresis threshold of the edge detector.
pub const DEFAULT_EDGE_LOW: f64 = 100.0;

/// High hysteresis threshold of the edge detector.
pub const DEFAULT_EDGE_HIGH: f64 = 200.0;

// =============================================================================
// PERIMETER REFINEMENT
// =============================================================================

/// Minimum cloud size accepted by the alpha-shape strategy.
pub const MIN_ALPHA_SHAPE_POINTS: usize = 4;

/// Default alpha of the alpha-shape strategy.
pub const DEFAULT_ALPHA: f64 = 0.99999;

/// Default clearance radius of the density filter.
pub const DEFAULT_CLEARANCE_RADIUS: f64 = 5.0;

/// Points with fewer neighbours than this are kept by the clearance filter.
pub const DEFAULT_NEIGHBOR_THRESHOLD: usize = 8;

// =============================================================================
// MESH CONSTRUCTION
// =============================================================================

/// Default height scale of the grid extrusion.
pub const DEFAULT_HEIGHT_SCALE: f64 = 10.0;

/// Default angular subdivision of the revolution mesh.
pub const DEFAULT_REVOLUTION_STEPS: u32 = 100;

/// Smallest angular subdivision producing a non-degenerate tube.
pub const MIN_REVOLUTION_STEPS: u32 = 3;

/// Default number of layers of the stacked point cloud.
pub const DEFAULT_STACK_LAYERS: usize = 15;

/// Default per-layer increment of `c`, as `(re, im)`.
pub const DEFAULT_STACK_C_INCREMENT: (f64, f64) = (0.0, -0.01);

// =============================================================================
// LIMITS
// =============================================================================

/// Maximum number of vertices in a single mesh (indices are `u32`).
pub const MAX_VERTICES: usize = u32::MAX as usize;

#[cfg(test)]
mod tests;
