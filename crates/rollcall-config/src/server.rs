use std::time::Duration;

use crate::env_or;

/// HTTP listener configuration.
///
/// - `HOST`: bind host (default `0.0.0.0`)
/// - `PORT`: bind port (default `5000`)
/// - `SHUTDOWN_TIMEOUT_SECS`: grace period for in-flight requests (default `10`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub shutdown_timeout: Duration,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            shutdown_timeout: Duration::from_secs(10),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            host: std::env::var("HOST").unwrap_or(defaults.host),
            port: env_or("PORT", defaults.port),
            shutdown_timeout: Duration::from_secs(env_or(
                "SHUTDOWN_TIMEOUT_SECS",
                defaults.shutdown_timeout.as_secs(),
            )),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
