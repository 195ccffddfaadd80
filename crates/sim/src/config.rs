//! Driver configuration, read from the environment.

use std::path::PathBuf;

use gilded_rose_observability::LogFormat;

use crate::error::{SimError, SimResult};

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const SEED_VAR: &str = "GILDED_ROSE_SEED";
pub const OUTPUT_VAR: &str = "GILDED_ROSE_OUTPUT";
pub const LOG_FORMAT_VAR: &str = "GILDED_ROSE_LOG_FORMAT";

/// Days rendered by default: the seed state plus ten simulated days.
pub const DEFAULT_DAYS: u64 = 11;

/// How inventory snapshots are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Fixed-width table per day.
    #[default]
    Text,
    /// One JSON object per line per day.
    Json,
}

impl core::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format `{other}` (expected `text` or `json`)")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    /// Number of rendered days, counting the seed state as day 0.
    pub days: u64,
    /// JSON seed file; the built-in item set is used when absent.
    pub seed_path: Option<PathBuf>,
    pub output: OutputFormat,
    pub log_format: LogFormat,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            days: DEFAULT_DAYS,
            seed_path: None,
            output: OutputFormat::Text,
            log_format: LogFormat::Text,
        }
    }
}

impl SimConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> SimResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`; unset or empty keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> SimResult<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(raw) = get(DAYS_VAR) {
            config.days = raw.trim().parse().map_err(|e: core::num::ParseIntError| {
                SimError::invalid_setting(DAYS_VAR, raw.as_str(), e.to_string())
            })?;
        }

        if let Some(raw) = get(SEED_VAR) {
            config.seed_path = Some(PathBuf::from(raw));
        }

        if let Some(raw) = get(OUTPUT_VAR) {
            config.output = raw
                .parse()
                .map_err(|e: String| SimError::invalid_setting(OUTPUT_VAR, raw.as_str(), e))?;
        }

        if let Some(raw) = get(LOG_FORMAT_VAR) {
            config.log_format = raw
                .parse()
                .map_err(|e: String| SimError::invalid_setting(LOG_FORMAT_VAR, raw.as_str(), e))?;
        }

        Ok(config)
    }
}
