//! TOML configuration for the report binary.
//!
//! Every field is optional in the file; CLI flags override file values and
//! the defaults below back both.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Settings for report generation (`report.toml`).
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ReportConfig {
    /// Directory the HTML artifacts are written to.
    pub output_dir: PathBuf,

    /// How long a fetched series stays fresh, in seconds.
    pub cache_ttl_secs: u64,

    /// Short simple-moving-average window.
    pub short_window: usize,

    /// Long simple-moving-average window.
    pub long_window: usize,

    /// Bollinger band window.
    pub bollinger_window: usize,

    /// Minimum prominence for support/resistance levels.
    pub prominence: f64,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("reports"),
            cache_ttl_secs: 3600,
            short_window: 20,
            long_window: 50,
            bollinger_window: 20,
            prominence: 5.0,
        }
    }
}

impl ReportConfig {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
