use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Failure confined to a single candidate file; the scan moves on.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Inconsistent pixel data in {}: {source}", path.display())]
    Dimensions {
        path: PathBuf,
        source: color_bucket::TallyError,
    },

    #[error("Failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Failure of the report sink. Fatal for the whole run.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Failed to create report {}: {source}", path.display())]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write report row: {0}")]
    Write(#[from] csv::Error),

    #[error("Failed to flush report: {0}")]
    Flush(#[from] std::io::Error),
}
