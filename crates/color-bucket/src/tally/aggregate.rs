//! Single-pass pixel aggregation

use super::error::TallyError;
use crate::bucket::ColorBucket;
use crate::color::Rgb8;

/// Bucket counts for one image.
///
/// Counts are kept in configuration order. Buckets sharing a name share one
/// accumulator: the slot of the first bucket carrying that name. Every column
/// with that name then reports the same combined count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    identifier: String,
    names: Vec<String>,
    // bucket position -> accumulator position
    slots: Vec<usize>,
    counts: Vec<u64>,
    total: u64,
}

impl Tally {
    /// Create a tally with every bucket at zero and no pixels seen.
    pub fn empty(identifier: impl Into<String>, buckets: &[ColorBucket]) -> Self {
        let names: Vec<String> = buckets.iter().map(|b| b.name.clone()).collect();
        let slots = names
            .iter()
            .enumerate()
            .map(|(i, name)| names[..i].iter().position(|n| n == name).unwrap_or(i))
            .collect();

        Self {
            identifier: identifier.into(),
            counts: vec![0; names.len()],
            names,
            slots,
            total: 0,
        }
    }

    /// Scan `pixels` in order and attribute each to the first matching bucket.
    ///
    /// Every pixel increments the total. A pixel matching no bucket counts
    /// only towards the total; a pixel matching several counts only for the
    /// earliest one in `buckets`.
    ///
    /// # Example
    /// ```
    /// use color_bucket::{ColorBucket, ColorRange, Rgb8, Tally};
    ///
    /// let buckets = [ColorBucket::new(
    ///     "red",
    ///     ColorRange::new(200, 255),
    ///     ColorRange::new(0, 50),
    ///     ColorRange::new(0, 50),
    /// )];
    /// let tally = Tally::aggregate("a.jpg", &[Rgb8::new(255, 0, 0)], &buckets);
    ///
    /// assert_eq!(tally.count("red"), Some(1));
    /// assert_eq!(tally.total(), 1);
    /// ```
    pub fn aggregate(
        identifier: impl Into<String>,
        pixels: &[Rgb8],
        buckets: &[ColorBucket],
    ) -> Self {
        let mut tally = Self::empty(identifier, buckets);
        for &pixel in pixels {
            tally.record(pixel, buckets);
        }
        tally
    }

    /// Like [`Tally::aggregate`], checking that `pixels` is a full
    /// `width` x `height` row-major buffer first.
    pub fn scan(
        identifier: impl Into<String>,
        width: u32,
        height: u32,
        pixels: &[Rgb8],
        buckets: &[ColorBucket],
    ) -> Result<Self, TallyError> {
        if (width as u64) * (height as u64) != pixels.len() as u64 {
            return Err(TallyError::DimensionMismatch {
                width,
                height,
                len: pixels.len(),
            });
        }
        Ok(Self::aggregate(identifier, pixels, buckets))
    }

    fn record(&mut self, pixel: Rgb8, buckets: &[ColorBucket]) {
        self.total += 1;
        if let Some(index) = buckets.iter().position(|b| b.matches(pixel)) {
            self.counts[self.slots[index]] += 1;
        }
    }

    /// Identifier of the scanned image (usually its path).
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Number of pixels scanned.
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Count for the bucket called `name`, or `None` if no such bucket.
    pub fn count(&self, name: &str) -> Option<u64> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|i| self.counts[self.slots[i]])
    }

    /// `(name, count)` pairs in configuration order, one per bucket.
    pub fn counts(&self) -> impl Iterator<Item = (&str, u64)> + '_ {
        self.names
            .iter()
            .zip(&self.slots)
            .map(|(name, &slot)| (name.as_str(), self.counts[slot]))
    }

    /// Number of pixels attributed to some bucket. Never exceeds [`total`](Self::total).
    pub fn matched(&self) -> u64 {
        self.slots
            .iter()
            .enumerate()
            .filter(|&(i, &slot)| i == slot)
            .map(|(_, &slot)| self.counts[slot])
            .sum()
    }
}
