//! Error type for tally construction

use std::fmt;

/// Error returned when scan input is inconsistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TallyError {
    /// Pixel buffer length does not equal `width * height`
    DimensionMismatch {
        /// Declared image width
        width: u32,
        /// Declared image height
        height: u32,
        /// Number of pixels actually supplied
        len: usize,
    },
}

impl fmt::Display for TallyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TallyError::DimensionMismatch { width, height, len } => {
                write!(
                    f,
                    "pixel buffer has {} entries, expected {}x{}",
                    len, width, height
                )
            }
        }
    }
}

impl std::error::Error for TallyError {}
