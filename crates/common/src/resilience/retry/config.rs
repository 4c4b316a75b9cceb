//! Retry configuration with validation and a fluent builder

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::constants::{DEFAULT_INTERVAL, DEFAULT_MAX_RETRIES, MAX_INTERVAL, MAX_MAX_RETRIES};
use super::error::{ConfigError, ConfigResult};
use crate::utils::serde::duration_millis;

/// Configuration for retry behavior
///
/// The operation runs at most `max_retries + 1` times: one initial attempt
/// plus up to `max_retries` retries, separated by a fixed `interval`.
///
/// Serializes with the interval as milliseconds:
///
/// ```
/// use steadfast_common::resilience::RetryConfig;
///
/// let config: RetryConfig =
///     serde_json::from_str(r#"{ "max_retries": 5, "interval_ms": 250 }"#).unwrap();
/// assert_eq!(config.max_retries, 5);
/// assert_eq!(config.interval.as_millis(), 250);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Number of retries after the initial attempt
    pub max_retries: u32,
    /// Fixed delay between attempts
    #[serde(rename = "interval_ms", with = "duration_millis")]
    pub interval: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self { max_retries: DEFAULT_MAX_RETRIES, interval: DEFAULT_INTERVAL }
    }
}

impl RetryConfig {
    /// Create a new retry configuration with validation
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> RetryConfigBuilder {
        RetryConfigBuilder::new()
    }

    /// Create a configuration builder (alias for `new()`)
    pub fn builder() -> RetryConfigBuilder {
        RetryConfigBuilder::new()
    }

    /// Shorthand for the common `(retries, millis)` pair. Not validated.
    pub const fn fixed(max_retries: u32, interval_millis: u64) -> Self {
        Self { max_retries, interval: Duration::from_millis(interval_millis) }
    }

    /// Total number of attempts permitted, initial attempt included
    pub const fn attempt_budget(&self) -> u32 {
        self.max_retries.saturating_add(1)
    }

    /// Interval in whole milliseconds, saturating at `u64::MAX`
    pub fn interval_millis(&self) -> u64 {
        u64::try_from(self.interval.as_millis()).unwrap_or(u64::MAX)
    }

    /// Validate the configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::invalid(format!(
                "max_retries must be at most {MAX_MAX_RETRIES}, got {}",
                self.max_retries
            )));
        }

        if self.interval > MAX_INTERVAL {
            return Err(ConfigError::invalid(format!(
                "interval must be at most {MAX_INTERVAL:?}, got {:?}",
                self.interval
            )));
        }

        Ok(())
    }
}

/// Builder for RetryConfig with fluent API
#[derive(Debug)]
pub struct RetryConfigBuilder {
    config: RetryConfig,
}

impl Default for RetryConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfigBuilder {
    pub fn new() -> Self {
        Self { config: RetryConfig::default() }
    }

    pub fn max_retries(mut self, retries: u32) -> Self {
        self.config.max_retries = retries;
        self
    }

    pub fn interval(mut self, interval: Duration) -> Self {
        self.config.interval = interval;
        self
    }

    pub fn interval_millis(mut self, millis: u64) -> Self {
        self.config.interval = Duration::from_millis(millis);
        self
    }

    pub fn no_delay(mut self) -> Self {
        self.config.interval = Duration::ZERO;
        self
    }

    pub fn build(self) -> ConfigResult<RetryConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
