use super::checker::DelayRange;
use super::retry::RetryPolicy;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Total per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Random pause before every lookup, independent of retry backoff.
    #[serde(default = "default_request_delay_min_ms")]
    pub request_delay_min_ms: u64,

    #[serde(default = "default_request_delay_max_ms")]
    pub request_delay_max_ms: u64,

    #[serde(default = "default_true")]
    pub accept_invalid_certs: bool,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    #[serde(default = "default_accept_language")]
    pub accept_language: String,

    #[serde(default)]
    pub retry: RetryPolicy,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn request_delay(&self) -> DelayRange {
        DelayRange::from_millis(self.request_delay_min_ms, self.request_delay_max_ms)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            request_delay_min_ms: default_request_delay_min_ms(),
            request_delay_max_ms: default_request_delay_max_ms(),
            accept_invalid_certs: true,
            user_agent: default_user_agent(),
            accept_language: default_accept_language(),
            retry: RetryPolicy::default(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    20
}

fn default_request_delay_min_ms() -> u64 {
    2000
}

fn default_request_delay_max_ms() -> u64 {
    4000
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}

fn default_accept_language() -> String {
    "zh-CN,zh;q=0.9,en;q=0.8".to_string()
}

fn default_true() -> bool {
    true
}
