//! Dense row-major intensity grid.

/// A `width × height` grid of intensities in `[0, 255]`, stored row-major.
///
/// # Example
///
/// ```rust
/// use julia_types::ScalarField;
///
/// let field = ScalarField::from_raw(2, 2, vec![0, 64, 128, 255]).unwrap();
/// assert_eq!(field.get(1, 0), 64);
/// assert_eq!(field.row(1), &[128, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScalarField {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl ScalarField {
    /// Wraps a row-major buffer. Returns `None` when `data.len()` does not
    /// equal `width * height`.
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> Option<Self> {
        let expected = width.checked_mul(height)?;
        (data.len() == expected).then_some(Self {
            width,
            height,
            data,
        })
    }

    /// Creates a field with every sample set to `value`.
    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width * height],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Sample at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` lies outside the grid.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> u8 {
        assert!(x < self.width && y < self.height, "sample ({x}, {y}) out of bounds");
        self.data[y * self.width + x]
    }

    /// Row `y` as a slice.
    #[inline]
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Column `x`, top to bottom.
    pub fn column(&self, x: usize) -> Vec<u8> {
        (0..self.height).map(|y| self.get(x, y)).collect()
    }

    /// The raw row-major buffer.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable access to the row-major buffer, for producers filling the grid.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consumes the field, returning the row-major buffer.
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }

    /// Returns true if every sample equals `value`.
    pub fn is_uniform(&self, value: u8) -> bool {
        self.data.iter().all(|&v| v == value)
    }
}
