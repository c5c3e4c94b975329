//! Inclusive single-channel range

/// An inclusive interval over one 8-bit channel.
///
/// Bounds are stored as `u32` so any declared bound is representable even
/// though channel values never exceed 255. No ordering is enforced between
/// `start` and `end`: a range with `start > end` contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ColorRange {
    /// Lowest accepted value (inclusive)
    pub start: u32,
    /// Highest accepted value (inclusive)
    pub end: u32,
}

impl ColorRange {
    /// The range accepting every channel value.
    pub const FULL: ColorRange = ColorRange { start: 0, end: 255 };

    /// Create a range from inclusive bounds.
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    /// Whether `value` lies within `start..=end`.
    ///
    /// # Example
    /// ```
    /// use color_bucket::ColorRange;
    /// let range = ColorRange::new(200, 255);
    /// assert!(range.contains(200));
    /// assert!(range.contains(255));
    /// assert!(!range.contains(199));
    /// ```
    #[inline]
    pub fn contains(&self, value: u8) -> bool {
        let value = value as u32;
        self.start <= value && value <= self.end
    }
}
