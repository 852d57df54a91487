//! # Field Generation
//!
//! Escape-time evaluation over the sample grid.

use crate::complex::Complex;
use crate::error::FieldResult;
use crate::params::FieldParameters;
use config::constants::MAX_INTENSITY;
use julia_types::ScalarField;
use rayon::prelude::*;
use tracing::{debug, info};

/// Counts the updates `z ← z² + c` performed while `|z| < escape_radius`,
/// stopping after `max_iterations` updates.
///
/// Returns 0 when `z0` already lies outside the escape radius and
/// `max_iterations` when the orbit never escapes.
///
/// # Example
///
/// ```rust
/// use julia_field::{escape_count, Complex};
///
/// // Inside the unit disk with c = 0 the orbit never escapes.
/// assert_eq!(escape_count(Complex::new(0.5, 0.0), Complex::ZERO, 20, 2.0), 20);
/// // Already outside.
/// assert_eq!(escape_count(Complex::new(3.0, 0.0), Complex::ZERO, 20, 2.0), 0);
/// ```
#[inline]
pub fn escape_count(z0: Complex, c: Complex, max_iterations: u32, escape_radius: f64) -> u32 {
    let limit = escape_radius * escape_radius;
    let mut z = z0;
    let mut n = 0;
    while n < max_iterations && z.norm_sqr() < limit {
        z = z.square() + c;
        n += 1;
    }
    n
}

/// Maps an escape count to `255 − ⌊n·255 / max_iterations⌋`, clamped to `[0, 255]`.
///
/// `max_iterations` must be non-zero; [`FieldParameters::validate`] enforces it.
#[inline]
pub fn intensity(n: u32, max_iterations: u32) -> u8 {
    let max = u64::from(MAX_INTENSITY);
    let scaled = (u64::from(n) * max / u64::from(max_iterations)).min(max);
    (max - scaled) as u8
}

/// Intensity of sample `(x, y)`. Pure function of its arguments.
#[inline]
pub fn sample_intensity(params: &FieldParameters, x: usize, y: usize) -> u8 {
    let z0 = params.pixel_to_complex(x, y);
    let n = escape_count(z0, params.c, params.max_iterations, params.escape_radius);
    intensity(n, params.max_iterations)
}

/// Evaluates the escape-time map over the whole grid.
///
/// Rows are written to disjoint slices in parallel; the result is
/// bit-identical to a sequential evaluation.
///
/// # Errors
///
/// Returns [`crate::FieldError::InvalidArgument`] when `params` fails
/// [`FieldParameters::validate`] (e.g. `max_iterations = 0`).
///
/// # Example
///
/// ```rust
/// use julia_field::{generate, Complex, FieldParameters};
///
/// let params = FieldParameters::symmetric(10, 10, Complex::ZERO, 10).with_zoom(3.0);
/// let field = generate(&params).unwrap();
/// assert!(field.is_uniform(0));
/// ```
pub fn generate(params: &FieldParameters) -> FieldResult<ScalarField> {
    params.validate()?;

    info!(
        width = params.width,
        height = params.height,
        c = %params.c,
        max_iterations = params.max_iterations,
        "generating escape-time field"
    );

    let mut field = ScalarField::filled(params.width, params.height, 0);
    field
        .data_mut()
        .par_chunks_mut(params.width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, sample) in row.iter_mut().enumerate() {
                *sample = sample_intensity(params, x, y);
            }
        });

    debug!(
        foreground = field.data().iter().filter(|&&v| v == 0).count(),
        "field generated"
    );
    Ok(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FieldError;

    #[test]
    fn test_intensity_bounds() {
        assert_eq!(intensity(0, 10), 255);
        assert_eq!(intensity(10, 10), 0);
        // 255 - floor(3 * 255 / 10) = 255 - 76
        assert_eq!(intensity(3, 10), 179);
        assert_eq!(intensity(1, 300), 255);
    }

    #[test]
    fn test_generation_is_deterministic() {
        let params = FieldParameters::asymmetric(64, 48, Complex::new(-0.7, 0.27015), 60);
        let a = generate(&params).unwrap();
        let b = generate(&params).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let params = FieldParameters::asymmetric(33, 17, Complex::new(0.355, 0.355), 40);
        let field = generate(&params).unwrap();
        for y in 0..params.height {
            for x in 0..params.width {
                assert_eq!(field.get(x, y), sample_intensity(&params, x, y));
            }
        }
    }

    #[test]
    fn test_zero_c_never_escapes_inside_unit_disk() {
        // zoom 3 keeps the whole 10x10 symmetric grid inside |z| < 1
        let params = FieldParameters::symmetric(10, 10, Complex::ZERO, 10).with_zoom(3.0);
        let field = generate(&params).unwrap();
        assert!(field.is_uniform(0));
    }

    #[test]
    fn test_zero_c_unzoomed_interior_is_black() {
        let params = FieldParameters::symmetric(10, 10, Complex::ZERO, 10);
        let field = generate(&params).unwrap();
        for y in 0..10 {
            for x in 0..10 {
                let z0 = params.pixel_to_complex(x, y);
                if z0.norm() < 1.0 {
                    assert_eq!(field.get(x, y), 0, "sample ({x}, {y}) escaped");
                }
            }
        }
        // The (-1.5, -1.5) corner starts outside radius 2
        assert_eq!(field.get(0, 0), 255);
    }

    #[test]
    fn test_rapidly_escaping_c() {
        let params = FieldParameters::asymmetric(4, 4, Complex::new(2.0, 0.0), 10)
            .with_escape_radius(2.0);
        let field = generate(&params).unwrap();
        for y in 0..4 {
            for x in 0..4 {
                let n = escape_count(params.pixel_to_complex(x, y), params.c, 10, 2.0);
                assert!(n <= 2, "sample ({x}, {y}) took {n} iterations");
            }
        }
        assert!(field.data().iter().all(|&v| v >= intensity(2, 10)));
    }

    #[test]
    fn test_zero_iterations_rejected() {
        let params = FieldParameters::symmetric(4, 4, Complex::ZERO, 0);
        assert!(matches!(
            generate(&params),
            Err(FieldError::InvalidArgument { .. })
        ));
    }
}
