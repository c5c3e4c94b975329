#![allow(clippy::module_inception)]

//! color-bucket: classify pixels into named per-channel color ranges
//!
//! A configuration is an ordered list of [`ColorBucket`]s. Each bucket holds
//! one inclusive [`ColorRange`] per channel. Scanning an image attributes
//! every pixel to the first bucket whose three ranges all contain it, and
//! the resulting [`Tally`] is rendered as a row of percentages.
//!
//! # Quick Start
//!
//! ```
//! use color_bucket::{format_row, header_row, ColorBucket, ColorRange, Rgb8, Tally};
//!
//! let buckets = vec![
//!     ColorBucket::new(
//!         "red",
//!         ColorRange::new(200, 255),
//!         ColorRange::new(0, 50),
//!         ColorRange::new(0, 50),
//!     ),
//!     ColorBucket::new(
//!         "white",
//!         ColorRange::new(230, 255),
//!         ColorRange::new(230, 255),
//!         ColorRange::new(230, 255),
//!     ),
//! ];
//!
//! let pixels = [Rgb8::new(255, 0, 0), Rgb8::new(250, 250, 250)];
//! let tally = Tally::aggregate("sample.jpg", &pixels, &buckets);
//!
//! assert_eq!(header_row(&buckets), vec!["filename", "red", "white"]);
//! assert_eq!(
//!     format_row(&tally, &buckets),
//!     vec!["sample.jpg", "50.0000%", "50.0000%"]
//! );
//! ```
//!
//! # Matching Rules
//!
//! - Channels are compared on the 8-bit scale. Wider samples are reduced by
//!   integer division ([`Rgb8::from_rgb16`]). Alpha is ignored.
//! - Range bounds are inclusive. A range with `start > end` matches nothing.
//! - Bucket order is priority order: a pixel counts for at most one bucket.
//! - An image with no pixels renders every column as `NaN%`.

pub mod bucket;
pub mod color;
pub mod tally;


pub use bucket::{classify, ColorBucket, ColorRange};
pub use color::Rgb8;
pub use tally::{format_row, header_row, percentage, Tally, TallyError, FILENAME_COLUMN};
