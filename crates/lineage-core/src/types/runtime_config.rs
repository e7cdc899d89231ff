//! Runtime configuration types for operational parameters
//!
//! These types define configuration that controls how lineage talks to the
//! tagging service and how hard it retries when that service misbehaves.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete runtime configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RuntimeConfig {
    /// Tagging service (Clouddriver) connection settings
    #[serde(default)]
    pub clouddriver: ClouddriverConfig,

    /// Retry policy for entity tag lookups
    #[serde(default)]
    pub retry: RetryPolicy,
}

/// Connection settings for the Clouddriver-compatible tagging service
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct ClouddriverConfig {
    /// Base URL of the service, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// HTTP timeout in seconds for a single request
    #[serde(default = "default_http_timeout")]
    pub timeout_secs: u64,

    /// User agent string for HTTP requests
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for ClouddriverConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_http_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:7002".to_string()
}
fn default_http_timeout() -> u64 {
    30
}
fn default_user_agent() -> String {
    format!("lineage/{}", env!("CARGO_PKG_VERSION"))
}

/// Retry policy for an operation
///
/// The defaults (15 attempts, fixed 2000ms delay, no fail-fast) sleep 28
/// seconds in total across a fully failing lookup. Each attempt also waits
/// on up to two requests, each bounded by `clouddriver.timeout-secs`, so an
/// unresponsive service holds a lookup for at most
/// `15 * 2 * timeout-secs + 28` seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct RetryPolicy {
    /// Maximum number of attempts, including the first one
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Retry strategy
    #[serde(default)]
    pub strategy: RetryStrategy,

    /// Backoff multiplier for exponential strategies
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_delay")]
    pub initial_delay_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_delay")]
    pub max_delay_ms: u64,

    /// Stop retrying as soon as an error is classified as non-retryable
    #[serde(default)]
    pub fast_fail: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            strategy: RetryStrategy::default(),
            backoff_multiplier: default_backoff_multiplier(),
            initial_delay_ms: default_initial_delay(),
            max_delay_ms: default_max_delay(),
            fast_fail: false,
        }
    }
}

impl RetryPolicy {
    /// Delay to wait after failed attempt `attempt` (1-indexed)
    ///
    /// Never exceeds `max_delay_ms`.
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let step = attempt.saturating_sub(1);

        let delay_ms = match self.strategy {
            RetryStrategy::None => 0,
            RetryStrategy::FixedDelay => self.initial_delay_ms,
            RetryStrategy::LinearBackoff => self
                .initial_delay_ms
                .saturating_mul(u64::from(step) + 1),
            RetryStrategy::ExponentialBackoff => {
                let factor = self
                    .backoff_multiplier
                    .powi(i32::try_from(step).unwrap_or(i32::MAX));
                (self.initial_delay_ms as f64 * factor) as u64
            }
        };

        Duration::from_millis(delay_ms.min(self.max_delay_ms))
    }
}

fn default_max_attempts() -> u32 {
    15
}
fn default_backoff_multiplier() -> f64 {
    2.0
}
fn default_initial_delay() -> u64 {
    2000
}
fn default_max_delay() -> u64 {
    30000
}

/// Retry strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RetryStrategy {
    /// Retry immediately
    None,

    /// Fixed delay between retries (default)
    #[default]
    FixedDelay,

    /// Exponential backoff
    ExponentialBackoff,

    /// Linear backoff
    LinearBackoff,
}
