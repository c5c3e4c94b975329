//! Color ranges and named buckets
//!
//! A [`ColorBucket`] is three inclusive [`ColorRange`]s, one per channel.
//! A pixel belongs to a bucket when every channel falls inside its range.

mod bucket;
mod range;

pub use bucket::{classify, ColorBucket};
pub use range::ColorRange;
