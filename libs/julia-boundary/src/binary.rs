//! Binarised field.

use julia_types::ScalarField;

/// Foreground mask of a field: `true` where `intensity <= cutoff`.
///
/// Darker-than-cutoff samples are foreground, matching an inverted binary
/// threshold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryImage {
    width: usize,
    height: usize,
    mask: Vec<bool>,
}

impl BinaryImage {
    /// Binarises `field` at `cutoff`.
    ///
    /// ```rust
    /// use julia_boundary::BinaryImage;
    /// use julia_types::ScalarField;
    ///
    /// let field = ScalarField::from_raw(3, 1, vec![0, 127, 128]).unwrap();
    /// let binary = BinaryImage::threshold(&field, 127);
    /// assert!(binary.get(0, 0) && binary.get(1, 0) && !binary.get(2, 0));
    /// ```
    pub fn threshold(field: &ScalarField, cutoff: u8) -> Self {
        Self {
            width: field.width(),
            height: field.height(),
            mask: field.data().iter().map(|&v| v <= cutoff).collect(),
        }
    }

    /// Builds a mask directly from row-major booleans.
    pub fn from_mask(width: usize, height: usize, mask: Vec<bool>) -> Option<Self> {
        (mask.len() == width * height).then_some(Self {
            width,
            height,
            mask,
        })
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.mask[y * self.width + x]
    }

    /// Sample with replicated borders: coordinates are clamped into the grid.
    #[inline]
    pub fn get_clamped(&self, x: isize, y: isize) -> bool {
        let x = x.clamp(0, self.width as isize - 1) as usize;
        let y = y.clamp(0, self.height as isize - 1) as usize;
        self.get(x, y)
    }

    /// Intensity of the binarised image: 255 for foreground, 0 otherwise.
    #[inline]
    pub fn level(&self, x: isize, y: isize) -> f64 {
        if self.get_clamped(x, y) {
            255.0
        } else {
            0.0
        }
    }

    pub fn foreground_count(&self) -> usize {
        self.mask.iter().filter(|&&v| v).count()
    }

    pub fn is_empty(&self) -> bool {
        self.mask.is_empty()
    }
}
