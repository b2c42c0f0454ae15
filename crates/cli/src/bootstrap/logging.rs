use anyhow::Context;
use repwatch_domain::Config;
use repwatch_infrastructure::logging::{self, LoggingGuard};
use tracing::info;

pub fn init_logging(config: &Config) -> anyhow::Result<LoggingGuard> {
    let guard =
        logging::init_logging(&config.logging).context("Failed to initialize logging")?;
    if guard.has_log_file() {
        if let Some(path) = &config.logging.file {
            info!(path = %path, "Mirroring logs to file");
        }
    }
    Ok(guard)
}
