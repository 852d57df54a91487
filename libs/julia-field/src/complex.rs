//! # Complex Numbers
//!
//! Minimal `f64` complex value type for the escape-time loop.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul};

/// A complex number `re + i·im`.
///
/// # Example
///
/// ```rust
/// use julia_field::Complex;
///
/// let i = Complex::new(0.0, 1.0);
/// assert_eq!(i * i, Complex::new(-1.0, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub const ZERO: Self = Self { re: 0.0, im: 0.0 };

    #[inline]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    /// `|z|²`, avoiding the square root in the escape test.
    #[inline]
    pub fn norm_sqr(self) -> f64 {
        self.re * self.re + self.im * self.im
    }

    /// `|z|`.
    #[inline]
    pub fn norm(self) -> f64 {
        self.re.hypot(self.im)
    }

    /// `z²`.
    #[inline]
    pub fn square(self) -> Self {
        Self {
            re: self.re * self.re - self.im * self.im,
            im: 2.0 * self.re * self.im,
        }
    }

    /// Multiplies both parts by a real factor.
    #[inline]
    pub fn scale(self, factor: f64) -> Self {
        Self {
            re: self.re * factor,
            im: self.im * factor,
        }
    }

    pub fn is_finite(self) -> bool {
        self.re.is_finite() && self.im.is_finite()
    }
}

impl Add for Complex {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            re: self.re + rhs.re,
            im: self.im + rhs.im,
        }
    }
}

impl Mul for Complex {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self {
            re: self.re * rhs.re - self.im * rhs.im,
            im: self.re * rhs.im + self.im * rhs.re,
        }
    }
}

impl From<(f64, f64)> for Complex {
    fn from((re, im): (f64, f64)) -> Self {
        Self::new(re, im)
    }
}

impl std::fmt::Display for Complex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.im < 0.0 {
            write!(f, "{}-{}i", self.re, -self.im)
        } else {
            write!(f, "{}+{}i", self.re, self.im)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_square_matches_mul() {
        let z = Complex::new(0.3, -1.7);
        assert_eq!(z.square(), z * z);
    }

    #[test]
    fn test_norm() {
        let z = Complex::new(3.0, 4.0);
        assert_relative_eq!(z.norm(), 5.0);
        assert_relative_eq!(z.norm_sqr(), 25.0);
    }

    #[test]
    fn test_scale_and_add() {
        let step = Complex::new(0.0, -0.01);
        let c = Complex::new(-0.7, 0.27015) + step.scale(3.0);
        assert_relative_eq!(c.im, 0.24015, epsilon = 1e-12);
    }

    #[test]
    fn test_display() {
        assert_eq!(Complex::new(1.0, -2.0).to_string(), "1-2i");
        assert_eq!(Complex::new(0.5, 0.25).to_string(), "0.5+0.25i");
    }
}
