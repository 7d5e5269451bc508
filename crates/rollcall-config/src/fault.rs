//! Fault injection configuration.
//!
//! # Environment Variables
//!
//! - `FAULT_INJECTION_ENABLED`: wrap the roster generator in the fault
//!   injecting store (default: `true`)
//! - `FAULT_DELAY_STEP_MS`: size of one delay bucket in milliseconds
//!   (default: `500`). Injected delays are 1..=4 steps.

use std::time::Duration;

use crate::{env_flag, env_or};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaultConfig {
    pub enabled: bool,
    pub delay_step: Duration,
}

impl Default for FaultConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            delay_step: Duration::from_millis(500),
        }
    }
}

impl FaultConfig {
    #[must_use]
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            enabled: env_flag("FAULT_INJECTION_ENABLED", defaults.enabled),
            delay_step: Duration::from_millis(env_or(
                "FAULT_DELAY_STEP_MS",
                defaults.delay_step.as_millis() as u64,
            )),
        }
    }

    /// Config with injection switched off.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }
}
