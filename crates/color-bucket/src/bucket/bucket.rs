//! Named three-channel bucket

use super::range::ColorRange;
use crate::color::Rgb8;

/// A named color classification rule.
///
/// Names are expected to be unique within a configuration but this is not
/// enforced; see [`crate::Tally`] for how duplicates are counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorBucket {
    /// Column name used in the report
    pub name: String,
    /// Accepted red values
    pub red: ColorRange,
    /// Accepted green values
    pub green: ColorRange,
    /// Accepted blue values
    pub blue: ColorRange,
}

impl ColorBucket {
    /// Create a bucket from a name and per-channel ranges.
    pub fn new(
        name: impl Into<String>,
        red: ColorRange,
        green: ColorRange,
        blue: ColorRange,
    ) -> Self {
        Self {
            name: name.into(),
            red,
            green,
            blue,
        }
    }

    /// Whether `pixel` falls inside all three channel ranges.
    ///
    /// # Example
    /// ```
    /// use color_bucket::{ColorBucket, ColorRange, Rgb8};
    ///
    /// let red = ColorBucket::new(
    ///     "red",
    ///     ColorRange::new(200, 255),
    ///     ColorRange::new(0, 50),
    ///     ColorRange::new(0, 50),
    /// );
    /// assert!(red.matches(Rgb8::new(255, 0, 0)));
    /// assert!(!red.matches(Rgb8::new(255, 51, 0)));
    /// ```
    #[inline]
    pub fn matches(&self, pixel: Rgb8) -> bool {
        self.red.contains(pixel.r) && self.green.contains(pixel.g) && self.blue.contains(pixel.b)
    }
}

/// Classify one pixel against one bucket.
#[inline]
pub fn classify(pixel: Rgb8, bucket: &ColorBucket) -> bool {
    bucket.matches(pixel)
}
