//! Per-image tallies and report rows
//!
//! [`Tally`] is the result of one scan over an image: how many pixels landed
//! in each bucket and how many pixels were seen in total. [`format_row`] and
//! [`header_row`] turn tallies into report records.

mod aggregate;
mod error;
mod report;

pub use aggregate::Tally;
pub use error::TallyError;
pub use report::{format_row, header_row, percentage, FILENAME_COLUMN};
