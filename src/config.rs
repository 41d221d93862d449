//! Configuration Module
//!
//! Handles loading the TTL cache configuration from environment variables.

use std::env;
use std::time::Duration;

use serde::Deserialize;

/// Sweep interval used when nothing else is configured.
pub const DEFAULT_SWEEP_INTERVAL: Duration = Duration::from_secs(10);

/// Lower bound applied to the sweep interval.
pub const MIN_SWEEP_INTERVAL: Duration = Duration::from_millis(1);

/// TTL cache configuration parameters.
///
/// Can be loaded from the environment or deserialized as part of a host
/// application's configuration; missing fields take their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Background sweep interval in milliseconds
    pub sweep_interval_ms: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_SWEEP_INTERVAL_MS` - Sweep frequency in milliseconds (default: 10000)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            sweep_interval_ms: env::var("CACHE_SWEEP_INTERVAL_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.sweep_interval_ms),
        }
    }

    /// Returns the sweep interval, clamped to at least one millisecond.
    pub fn sweep_interval(&self) -> Duration {
        Duration::from_millis(self.sweep_interval_ms).max(MIN_SWEEP_INTERVAL)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            sweep_interval_ms: DEFAULT_SWEEP_INTERVAL.as_millis() as u64,
        }
    }
}
