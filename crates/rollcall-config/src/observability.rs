//! Logging and metrics configuration.
//!
//! # Environment Variables
//!
//! - `OBSERVABILITY_ENABLED`: install the Prometheus recorder, time the
//!   roster store and record HTTP metrics (default: `true`)
//! - `LOG_LEVEL`: default level for this crate's targets (default: `info`)
//! - `LOG_FORMAT`: `compact` or `json` (default: `compact`)

use std::str::FromStr;

use crate::{env_flag, env_or};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "compact" | "pretty" | "text" => Ok(Self::Compact),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObservabilityConfig {
    pub enabled: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_level: "info".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}

impl ObservabilityConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_flag("OBSERVABILITY_ENABLED", defaults.enabled),
            log_level: std::env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            log_format: env_or("LOG_FORMAT", defaults.log_format),
        }
    }
}
