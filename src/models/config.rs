use color_bucket::{ColorBucket, ColorRange};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Application configuration loaded from colors.toml
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Color buckets, in column and match-priority order
    #[serde(default)]
    pub colors: Vec<ColorConfig>,
}

/// One `[[colors]]` table
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq)]
pub struct ColorConfig {
    /// Report column name
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub red: RangeConfig,

    #[serde(default)]
    pub green: RangeConfig,

    #[serde(default)]
    pub blue: RangeConfig,
}

/// Inclusive channel range; missing bounds default to 0
#[derive(Debug, Default, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct RangeConfig {
    #[serde(default)]
    pub start: u32,

    #[serde(default)]
    pub end: u32,
}

impl From<RangeConfig> for ColorRange {
    fn from(range: RangeConfig) -> Self {
        ColorRange::new(range.start, range.end)
    }
}

impl From<&ColorConfig> for ColorBucket {
    fn from(color: &ColorConfig) -> Self {
        ColorBucket::new(
            color.name.clone(),
            color.red.into(),
            color.green.into(),
            color.blue.into(),
        )
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing or malformed file is not fatal: the error is logged and an
    /// empty configuration is returned, so the report only carries the
    /// filename column.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(config) => {
                tracing::info!(
                    path = %path.display(),
                    colors = config.colors.len(),
                    "Loaded configuration"
                );
                config
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), %e, "Failed to load config, using empty configuration");
                Self::default()
            }
        }
    }

    /// Load configuration from a TOML file, returning any error.
    pub fn try_load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Render the configuration back to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Buckets in declaration order
    pub fn buckets(&self) -> Vec<ColorBucket> {
        self.colors.iter().map(ColorBucket::from).collect()
    }
}
