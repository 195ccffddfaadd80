//! Driver error model.

use std::path::PathBuf;

use thiserror::Error;

/// Result type used across the simulation driver.
pub type SimResult<T> = Result<T, SimError>;

/// Failures of the surrounding driver (configuration, seed input, output).
///
/// The inventory core itself has no failure modes.
#[derive(Debug, Error)]
pub enum SimError {
    /// An environment setting had an unusable value.
    #[error("invalid setting {key}={value:?}: {reason}")]
    InvalidSetting {
        key: &'static str,
        value: String,
        reason: String,
    },

    /// The seed file could not be read.
    #[error("failed to read seed file {}: {source}", .path.display())]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The seed file was not a JSON array of items.
    #[error("failed to parse seed file {}: {source}", .path.display())]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A snapshot could not be serialized.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    /// Writing rendered output failed.
    #[error("failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

impl SimError {
    pub fn invalid_setting(
        key: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidSetting {
            key,
            value: value.into(),
            reason: reason.into(),
        }
    }
}
