//! # Runtime Configuration Module
//!
//! Environment-variable configuration for the long-running watch mode.
//!
//! ## Environment Variables
//!
//! ### `MUXC_POLL_INTERVAL_MS`
//!
//! Delay between two watch ticks, in milliseconds (decimal).
//!
//! Default: `1000` (one second). Zero or unparsable values fall back to the default.
//!
//! ```bash
//! MUXC_POLL_INTERVAL_MS=250 muxc -w -f config/muxc.yaml
//! ```
//!
//! Logging is configured separately, see [`crate::logging::LogConfig`].

use std::env;
use std::time::Duration;

/// Default delay between watch ticks.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(1);

/// Runtime configuration loaded from environment variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Delay between watch ticks
    pub poll_interval: Duration,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_interval_var(env::var("MUXC_POLL_INTERVAL_MS").ok().as_deref())
    }

    fn from_interval_var(val: Option<&str>) -> Self {
        let poll_interval = val
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map_or(DEFAULT_POLL_INTERVAL, Duration::from_millis);
        RuntimeConfig { poll_interval }
    }
}
