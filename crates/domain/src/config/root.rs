use serde::{Deserialize, Serialize};

use super::checker::CheckerConfig;
use super::errors::ConfigError;
use super::http::HttpConfig;
use super::logging::LoggingConfig;
use super::server::ServerConfig;
use super::services::ServicesConfig;

const LOCAL_CONFIG_PATH: &str = "repwatch.toml";
const SYSTEM_CONFIG_PATH: &str = "/etc/repwatch/config.toml";

/// Main configuration structure for repwatch
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Check cycle: input/output files, interval, pacing
    #[serde(default)]
    pub checker: CheckerConfig,

    /// Outbound HTTP client and retry policy
    #[serde(default)]
    pub http: HttpConfig,

    /// Reputation service endpoints
    #[serde(default)]
    pub services: ServicesConfig,

    /// JSON API
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. repwatch.toml in current directory
    /// 3. /etc/repwatch/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if let Some(path) = Self::get_config_path() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(path) = overrides.domains_file {
            self.checker.domains_file = path;
        }
        if let Some(path) = overrides.results_file {
            self.checker.results_file = path;
        }
        if let Some(secs) = overrides.interval_secs {
            self.checker.interval_secs = secs;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if overrides.serve {
            self.server.enabled = true;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.checker.interval_secs == 0 {
            return Err(ConfigError::Validation(
                "checker.interval_secs cannot be 0".to_string(),
            ));
        }
        if self.checker.service_delay_min_ms > self.checker.service_delay_max_ms {
            return Err(ConfigError::Validation(
                "checker.service_delay_min_ms exceeds service_delay_max_ms".to_string(),
            ));
        }
        if self.http.request_delay_min_ms > self.http.request_delay_max_ms {
            return Err(ConfigError::Validation(
                "http.request_delay_min_ms exceeds request_delay_max_ms".to_string(),
            ));
        }
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "http.timeout_secs cannot be 0".to_string(),
            ));
        }
        if self.http.retry.max_attempts == 0 {
            return Err(ConfigError::Validation(
                "http.retry.max_attempts cannot be 0".to_string(),
            ));
        }
        for (name, endpoint) in [
            ("google", &self.services.google),
            ("spamhaus", &self.services.spamhaus),
        ] {
            if endpoint.base_url.trim().is_empty() || endpoint.query_param.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "services.{} needs a base_url and a query_param",
                    name
                )));
            }
        }
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG_PATH).exists() {
            Some(LOCAL_CONFIG_PATH.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG_PATH).exists() {
            Some(SYSTEM_CONFIG_PATH.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub domains_file: Option<String>,
    pub results_file: Option<String>,
    pub interval_secs: Option<u64>,
    pub log_level: Option<String>,
    pub web_port: Option<u16>,
    pub serve: bool,
}
