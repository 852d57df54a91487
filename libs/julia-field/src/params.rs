//! # Field Parameters
//!
//! Immutable per-call configuration of the escape-time field.

use crate::complex::Complex;
use crate::error::{FieldError, FieldResult};
use config::constants::{
    ASYMMETRIC_ESCAPE_RADIUS, ASYMMETRIC_SCALE_X, ASYMMETRIC_SCALE_Y, DEFAULT_FIELD_SIZE,
    DEFAULT_JULIA_C, DEFAULT_MAX_ITERATIONS, DEFAULT_ZOOM, SYMMETRIC_ESCAPE_RADIUS,
    SYMMETRIC_SCALE,
};
use serde::{Deserialize, Serialize};

/// Axis scales of the pixel → complex plane mapping.
///
/// With zoom 1 and no pan, column `x` maps to
/// `scale_x · (x − width/2) / (width/2)`, i.e. `[-scale_x, scale_x)`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Mapping {
    /// `[-1.5, 1.5) × [-1, 1)`, the mapping of the height-map scripts.
    pub const ASYMMETRIC: Self = Self {
        scale_x: ASYMMETRIC_SCALE_X,
        scale_y: ASYMMETRIC_SCALE_Y,
    };

    /// `[-1.5, 1.5)²`.
    pub const SYMMETRIC: Self = Self {
        scale_x: SYMMETRIC_SCALE,
        scale_y: SYMMETRIC_SCALE,
    };
}

impl Default for Mapping {
    fn default() -> Self {
        Self::ASYMMETRIC
    }
}

/// Parameters of one field generation.
///
/// Both legacy flavours of the generator are configurations of this
/// struct: [`FieldParameters::asymmetric`] and [`FieldParameters::symmetric`].
///
/// # Example
///
/// ```rust
/// use julia_field::{Complex, FieldParameters, Mapping};
///
/// let params = FieldParameters::asymmetric(800, 600, Complex::new(-0.7, 0.27015), 300)
///     .with_zoom(2.0)
///     .with_pan(0.1, -0.2);
/// assert_eq!(params.mapping, Mapping::ASYMMETRIC);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldParameters {
    pub width: usize,
    pub height: usize,
    pub zoom: f64,
    pub pan_x: f64,
    pub pan_y: f64,
    pub c: Complex,
    pub max_iterations: u32,
    pub escape_radius: f64,
    pub mapping: Mapping,
}

impl Default for FieldParameters {
    fn default() -> Self {
        Self::asymmetric(
            DEFAULT_FIELD_SIZE,
            DEFAULT_FIELD_SIZE,
            Complex::from(DEFAULT_JULIA_C),
            DEFAULT_MAX_ITERATIONS,
        )
    }
}

impl FieldParameters {
    /// Asymmetric `1.5 / 1.0` mapping with escape radius 4.
    pub fn asymmetric(width: usize, height: usize, c: Complex, max_iterations: u32) -> Self {
        Self {
            width,
            height,
            zoom: DEFAULT_ZOOM,
            pan_x: 0.0,
            pan_y: 0.0,
            c,
            max_iterations,
            escape_radius: ASYMMETRIC_ESCAPE_RADIUS,
            mapping: Mapping::ASYMMETRIC,
        }
    }

    /// Symmetric `[-1.5, 1.5]` mapping with escape radius 2.
    pub fn symmetric(width: usize, height: usize, c: Complex, max_iterations: u32) -> Self {
        Self {
            escape_radius: SYMMETRIC_ESCAPE_RADIUS,
            mapping: Mapping::SYMMETRIC,
            ..Self::asymmetric(width, height, c, max_iterations)
        }
    }

    pub fn with_zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn with_pan(mut self, pan_x: f64, pan_y: f64) -> Self {
        self.pan_x = pan_x;
        self.pan_y = pan_y;
        self
    }

    pub fn with_c(mut self, c: Complex) -> Self {
        self.c = c;
        self
    }

    pub fn with_escape_radius(mut self, escape_radius: f64) -> Self {
        self.escape_radius = escape_radius;
        self
    }

    pub fn with_mapping(mut self, mapping: Mapping) -> Self {
        self.mapping = mapping;
        self
    }

    /// Checks every invariant required by [`crate::generate`].
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidArgument`] for zero dimensions, a
    /// non-positive zoom or escape radius, zero iterations, or non-finite
    /// pan, scale or `c`.
    pub fn validate(&self) -> FieldResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(FieldError::invalid_argument(format!(
                "field dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.max_iterations == 0 {
            return Err(FieldError::invalid_argument(
                "max_iterations must be at least 1",
            ));
        }
        if !(self.zoom.is_finite() && self.zoom > 0.0) {
            return Err(FieldError::invalid_argument(format!(
                "zoom must be positive and finite, got {}",
                self.zoom
            )));
        }
        if !(self.escape_radius.is_finite() && self.escape_radius > 0.0) {
            return Err(FieldError::invalid_argument(format!(
                "escape_radius must be positive and finite, got {}",
                self.escape_radius
            )));
        }
        if !(self.pan_x.is_finite() && self.pan_y.is_finite()) {
            return Err(FieldError::invalid_argument("pan must be finite"));
        }
        if !(self.mapping.scale_x.is_finite() && self.mapping.scale_y.is_finite()) {
            return Err(FieldError::invalid_argument("mapping scales must be finite"));
        }
        if !self.c.is_finite() {
            return Err(FieldError::invalid_argument(format!(
                "c must be finite, got {}",
                self.c
            )));
        }
        Ok(())
    }

    /// Maps sample `(x, y)` to its starting point `z₀`.
    #[inline]
    pub fn pixel_to_complex(&self, x: usize, y: usize) -> Complex {
        let w = self.width as f64;
        let h = self.height as f64;
        let zx = self.mapping.scale_x * (x as f64 - w / 2.0) / (0.5 * self.zoom * w) + self.pan_x;
        let zy = self.mapping.scale_y * (y as f64 - h / 2.0) / (0.5 * self.zoom * h) + self.pan_y;
        Complex::new(zx, zy)
    }
}
