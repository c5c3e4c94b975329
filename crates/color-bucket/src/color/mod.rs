//! Pixel color type
//!
//! Classification always happens on 8-bit channels. Decoders that produce
//! higher precision samples convert through [`Rgb8::from_rgb16`], which
//! downscales by integer division.

mod rgb8;

pub use rgb8::Rgb8;
