use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Half-open `[min, max)` range a courtesy delay is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayRange {
    pub min: Duration,
    pub max: Duration,
}

impl DelayRange {
    pub fn from_millis(min_ms: u64, max_ms: u64) -> Self {
        Self {
            min: Duration::from_millis(min_ms),
            max: Duration::from_millis(max_ms),
        }
    }

    /// No delay at all.
    pub fn none() -> Self {
        Self {
            min: Duration::ZERO,
            max: Duration::ZERO,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.max.is_zero()
    }

    /// Maps a uniform sample in `[0, 1)` onto the range.
    pub fn at(&self, fraction: f64) -> Duration {
        if self.max <= self.min {
            return self.min;
        }
        let fraction = fraction.clamp(0.0, 1.0);
        self.min + (self.max - self.min).mul_f64(fraction)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CheckerConfig {
    #[serde(default = "default_domains_file")]
    pub domains_file: String,

    #[serde(default = "default_results_file")]
    pub results_file: String,

    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Run one cycle immediately instead of waiting a full interval.
    #[serde(default = "default_true")]
    pub run_on_startup: bool,

    /// Pause after a cycle task dies unexpectedly.
    #[serde(default = "default_error_cooldown_secs")]
    pub error_cooldown_secs: u64,

    /// Pause between the two service lookups of one domain.
    #[serde(default = "default_service_delay_min_ms")]
    pub service_delay_min_ms: u64,

    #[serde(default = "default_service_delay_max_ms")]
    pub service_delay_max_ms: u64,
}

impl CheckerConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_secs)
    }

    pub fn error_cooldown(&self) -> Duration {
        Duration::from_secs(self.error_cooldown_secs)
    }

    pub fn service_delay(&self) -> DelayRange {
        DelayRange::from_millis(self.service_delay_min_ms, self.service_delay_max_ms)
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            domains_file: default_domains_file(),
            results_file: default_results_file(),
            interval_secs: default_interval_secs(),
            run_on_startup: true,
            error_cooldown_secs: default_error_cooldown_secs(),
            service_delay_min_ms: default_service_delay_min_ms(),
            service_delay_max_ms: default_service_delay_max_ms(),
        }
    }
}

fn default_domains_file() -> String {
    "domains.json".to_string()
}

fn default_results_file() -> String {
    "security_results.json".to_string()
}

fn default_interval_secs() -> u64 {
    15 * 60
}

fn default_error_cooldown_secs() -> u64 {
    60
}

fn default_service_delay_min_ms() -> u64 {
    3000
}

fn default_service_delay_max_ms() -> u64 {
    5000
}

fn default_true() -> bool {
    true
}
