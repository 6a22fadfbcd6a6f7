//! Refresh configuration loaded from the environment.

use std::path::Path;
use std::time::Duration;

pub const REGISTRY_REFRESH_INTERVAL_ENV: &str = "GATEWAY_REGISTRY_REFRESH_INTERVAL_SECS";

/// Fixed polling interval used when nothing is configured.
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshConfig {
    /// Time between two refresh cycles.
    pub interval: Duration,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval: Duration::from_secs(DEFAULT_REFRESH_INTERVAL_SECS),
        }
    }
}

impl RefreshConfig {
    /// Load a `.env` file if one exists, then read the environment.
    pub fn load() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_env()
    }

    /// Load the given env file, then read the environment. Variables already
    /// set in the process take precedence over the file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::from_path(path.as_ref())?;
        Self::from_env()
    }

    /// Read configuration from environment variables.
    ///
    /// Optional (with defaults):
    /// - `GATEWAY_REGISTRY_REFRESH_INTERVAL_SECS`: seconds between cycles (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        let secs = match std::env::var(REGISTRY_REFRESH_INTERVAL_ENV) {
            Ok(raw) => parse_interval_secs(&raw)?,
            Err(_) => DEFAULT_REFRESH_INTERVAL_SECS,
        };

        Ok(Self {
            interval: Duration::from_secs(secs),
        })
    }
}

fn parse_interval_secs(raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => Err(ConfigError::Invalid(
            REGISTRY_REFRESH_INTERVAL_ENV,
            "must be a positive integer",
        )),
        Ok(secs) => Ok(secs),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable has an invalid value.
    #[error("invalid value for {0}: {1}")]
    Invalid(&'static str, &'static str),

    /// The env file could not be read or parsed.
    #[error("failed to load env file: {0}")]
    EnvFile(#[from] dotenvy::Error),
}
