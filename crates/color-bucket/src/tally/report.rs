//! Report row formatting

use super::aggregate::Tally;
use crate::bucket::ColorBucket;

/// Title of the first report column.
pub const FILENAME_COLUMN: &str = "filename";

/// Header record: `filename` followed by bucket names in order.
pub fn header_row(buckets: &[ColorBucket]) -> Vec<String> {
    std::iter::once(FILENAME_COLUMN.to_string())
        .chain(buckets.iter().map(|b| b.name.clone()))
        .collect()
}

/// Share of `total` represented by `count`, in percent.
///
/// A zero `total` is not special-cased: `0 / 0` yields NaN.
#[inline]
pub fn percentage(count: u64, total: u64) -> f64 {
    count as f64 / total as f64 * 100.0
}

/// Report record for `tally`: its identifier followed by one percentage per
/// bucket, rendered with four decimals and a trailing `%`.
///
/// Columns follow `buckets`, so the row always lines up with
/// [`header_row`] for the same slice.
///
/// # Example
/// ```
/// use color_bucket::{format_row, ColorBucket, ColorRange, Rgb8, Tally};
///
/// let buckets = [ColorBucket::new(
///     "dark",
///     ColorRange::new(0, 10),
///     ColorRange::new(0, 10),
///     ColorRange::new(0, 10),
/// )];
/// let pixels = [Rgb8::new(0, 0, 0), Rgb8::new(255, 255, 255), Rgb8::new(5, 5, 5), Rgb8::new(90, 90, 90)];
/// let tally = Tally::aggregate("a.jpg", &pixels, &buckets);
///
/// assert_eq!(format_row(&tally, &buckets), vec!["a.jpg", "50.0000%"]);
/// ```
pub fn format_row(tally: &Tally, buckets: &[ColorBucket]) -> Vec<String> {
    let mut row = Vec::with_capacity(buckets.len() + 1);
    row.push(tally.identifier().to_string());
    for bucket in buckets {
        let count = tally.count(&bucket.name).unwrap_or(0);
        row.push(format!("{:.4}%", percentage(count, tally.total())));
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bucket::ColorRange;
    use crate::color::Rgb8;

    fn gray(name: &str, lo: u32, hi: u32) -> ColorBucket {
        let range = ColorRange::new(lo, hi);
        ColorBucket::new(name, range, range, range)
    }

    #[test]
    fn test_header_row() {
        let buckets = [gray("dark", 0, 63), gray("light", 192, 255)];
        assert_eq!(header_row(&buckets), vec!["filename", "dark", "light"]);
    }

    #[test]
    fn test_header_row_without_buckets() {
        assert_eq!(header_row(&[]), vec!["filename"]);
    }

    #[test]
    fn test_four_decimal_places() {
        let buckets = [gray("dark", 0, 63)];
        let mut pixels = vec![Rgb8::new(255, 255, 255); 3];
        pixels[0] = Rgb8::new(0, 0, 0);
        let tally = Tally::aggregate("img", &pixels, &buckets);
        assert_eq!(format_row(&tally, &buckets), vec!["img", "33.3333%"]);
    }

    #[test]
    fn test_rounding() {
        let buckets = [gray("dark", 0, 63)];
        let mut pixels = vec![Rgb8::new(255, 255, 255); 3];
        pixels[0] = Rgb8::new(0, 0, 0);
        pixels[1] = Rgb8::new(0, 0, 0);
        let tally = Tally::aggregate("img", &pixels, &buckets);
        assert_eq!(format_row(&tally, &buckets)[1], "66.6667%");
    }

    #[test]
    fn test_zero_total_is_nan() {
        let buckets = [gray("dark", 0, 63)];
        let tally = Tally::aggregate("empty", &[], &buckets);
        assert_eq!(format_row(&tally, &buckets), vec!["empty", "NaN%"]);
        assert!(percentage(0, 0).is_nan());
    }

    #[test]
    fn test_identifier_is_kept_verbatim() {
        let tally = Tally::aggregate("dir, with comma/a \"b\".jpg", &[], &[]);
        assert_eq!(format_row(&tally, &[]), vec!["dir, with comma/a \"b\".jpg"]);
    }
}
