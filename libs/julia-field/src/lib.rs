//! # Julia Field
//!
//! Evaluates the escape-time map `z ← z² + c` over a sample grid and
//! produces a [`ScalarField`](julia_types::ScalarField) of intensities.
//!
//! ## Architecture
//!
//! ```text
//! FieldParameters → generate() → ScalarField
//!                     └─ per sample: pixel_to_complex → escape_count → intensity
//! ```
//!
//! Every sample is a pure function of `(x, y, params)`, so rows are
//! evaluated in parallel with rayon.
//!
//! ## Usage
//!
//! ```rust
//! use julia_field::{generate, Complex, FieldParameters};
//!
//! let params = FieldParameters::symmetric(16, 16, Complex::new(-0.7, 0.27015), 50);
//! let field = generate(&params).unwrap();
//! assert_eq!(field.len(), 256);
//! ```

pub mod complex;
pub mod error;
pub mod generate;
pub mod params;

pub use complex::Complex;
pub use error::{FieldError, FieldResult};
pub use generate::{escape_count, generate, intensity, sample_intensity};
pub use params::{FieldParameters, Mapping};
