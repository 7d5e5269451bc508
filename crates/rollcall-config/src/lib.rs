//! # Rollcall Config
//!
//! Configuration structures loaded from environment variables.
//!
//! - [`server`]: listen address and shutdown timeout
//! - [`fault`]: fault injection switch and delay step
//! - [`observability`]: metrics switch and log formatting
//!
//! # Example
//!
//! ```ignore
//! use rollcall_config::AppConfig;
//!
//! dotenvy::dotenv().ok();
//! let config = AppConfig::from_env();
//! println!("listening on {}", config.server.bind_address());
//! ```

pub mod fault;
pub mod observability;
pub mod server;

pub use fault::FaultConfig;
pub use observability::{LogFormat, ObservabilityConfig};
pub use server::ServerConfig;

/// Aggregate of every config section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub fault: FaultConfig,
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            fault: FaultConfig::from_env(),
            observability: ObservabilityConfig::from_env(),
        }
    }
}

/// Reads `key` and parses it, falling back to `default` when unset or invalid.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Boolean flag where only `false`/`0` (any case) disables it.
pub(crate) fn env_flag(key: &str, default: bool) -> bool {
    std::env::var(key)
        .map(|v| parse_flag(&v))
        .unwrap_or(default)
}

pub(crate) fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    !(value.eq_ignore_ascii_case("false") || value == "0")
}
