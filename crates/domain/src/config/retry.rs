use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Retry behaviour for reputation lookups.
///
/// A request is retried only when its method is in `allowed_methods` and the
/// response status is in `status_forcelist`. Transport failures are not
/// retried. Once `max_attempts` is reached the last response is handed back
/// to the caller as-is.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RetryPolicy {
    /// Total attempts including the first one.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "default_backoff_factor")]
    pub backoff_factor: f64,

    #[serde(default = "default_backoff_max_secs")]
    pub backoff_max_secs: u64,

    #[serde(default = "default_status_forcelist")]
    pub status_forcelist: Vec<u16>,

    #[serde(default = "default_allowed_methods")]
    pub allowed_methods: Vec<String>,

    /// Honour a `Retry-After: <seconds>` header instead of the computed backoff.
    #[serde(default = "default_true")]
    pub respect_retry_after: bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            backoff_factor: default_backoff_factor(),
            backoff_max_secs: default_backoff_max_secs(),
            status_forcelist: default_status_forcelist(),
            allowed_methods: default_allowed_methods(),
            respect_retry_after: true,
        }
    }
}

impl RetryPolicy {
    /// Single attempt, never retried.
    pub fn no_retry() -> Self {
        Self {
            max_attempts: 1,
            ..Self::default()
        }
    }

    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts.max(1);
        self
    }

    pub fn with_backoff_factor(mut self, factor: f64) -> Self {
        self.backoff_factor = factor.max(0.0);
        self
    }

    pub fn is_retryable_status(&self, status: u16) -> bool {
        self.status_forcelist.contains(&status)
    }

    pub fn allows_method(&self, method: &str) -> bool {
        self.allowed_methods
            .iter()
            .any(|m| m.eq_ignore_ascii_case(method))
    }

    /// Whether attempt number `attempt` (1-based) that ended with `status`
    /// should be followed by another one.
    pub fn should_retry(&self, method: &str, status: u16, attempt: u32) -> bool {
        attempt < self.max_attempts
            && self.allows_method(method)
            && self.is_retryable_status(status)
    }

    /// Sleep before the next attempt after `failures` consecutive failures.
    ///
    /// The first retry is immediate; after that the delay is
    /// `backoff_factor * 2^(failures - 1)`, capped at `backoff_max_secs`.
    pub fn backoff_after(&self, failures: u32) -> Duration {
        if failures <= 1 {
            return Duration::ZERO;
        }
        let exponent = (failures - 1).min(30) as i32;
        let secs = self.backoff_factor * 2f64.powi(exponent);
        let capped = secs.min(self.backoff_max_secs as f64);
        Duration::from_secs_f64(capped.max(0.0))
    }

    pub fn backoff_max(&self) -> Duration {
        Duration::from_secs(self.backoff_max_secs)
    }
}

fn default_max_attempts() -> u32 {
    5
}

fn default_backoff_factor() -> f64 {
    2.0
}

fn default_backoff_max_secs() -> u64 {
    120
}

fn default_status_forcelist() -> Vec<u16> {
    vec![500, 502, 503, 504, 403, 429]
}

fn default_allowed_methods() -> Vec<String> {
    vec!["GET".to_string(), "POST".to_string()]
}

fn default_true() -> bool {
    true
}
