use repwatch_domain::config::{LogFormat, LoggingConfig};
use repwatch_domain::DomainError;
use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the log file open for the life of the process and syncs it to disk
/// when dropped. Hold it in `main` until shutdown.
pub struct LoggingGuard {
    file: Option<Arc<File>>,
}

impl LoggingGuard {
    pub fn has_log_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn flush(&self) {
        if let Some(file) = &self.file {
            let _ = file.sync_all();
        }
    }
}

impl Drop for LoggingGuard {
    fn drop(&mut self) {
        self.flush();
    }
}

/// Initialize logging to the console and, when configured, to a log file.
///
/// - `LogFormat::Text`: human-readable lines, colored on the console only.
/// - `LogFormat::Json`: flattened JSON on both outputs.
///
/// Uses `RUST_LOG` if set, otherwise the configured level. Must be called
/// once at startup.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, DomainError> {
    let filter = build_filter(&config.level)?;

    let file = match config.file.as_deref() {
        Some(path) => Some(Arc::new(open_log_file(Path::new(path))?)),
        None => None,
    };

    let mut layers: Vec<BoxedLayer> = vec![console_layer(config.format)];
    if let Some(file) = &file {
        layers.push(file_layer(config.format, Arc::clone(file)));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()
        .map_err(|e| DomainError::ConfigError(format!("logging already initialized: {}", e)))?;

    Ok(LoggingGuard { file })
}

pub fn build_filter(level: &str) -> Result<EnvFilter, DomainError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(level)
            .map_err(|e| DomainError::ConfigError(format!("invalid log level '{}': {}", level, e))),
    }
}

/// Opens `path` for appending, creating it if needed.
pub fn open_log_file(path: &Path) -> Result<File, DomainError> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            DomainError::IoError(format!("cannot open log file {}: {}", path.display(), e))
        })
}

fn timer() -> ChronoLocal {
    ChronoLocal::new(LOG_TIMESTAMP_FORMAT.to_string())
}

fn console_layer(format: LogFormat) -> BoxedLayer {
    match format {
        LogFormat::Text => fmt::layer()
            .with_timer(timer())
            .with_target(true)
            .with_ansi(true)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_timer(timer())
            .with_target(true)
            .with_ansi(false)
            .boxed(),
    }
}

fn file_layer(format: LogFormat, file: Arc<File>) -> BoxedLayer {
    match format {
        LogFormat::Text => fmt::layer()
            .with_writer(file)
            .with_timer(timer())
            .with_target(true)
            .with_ansi(false)
            .boxed(),
        LogFormat::Json => fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(file)
            .with_timer(timer())
            .with_target(true)
            .with_ansi(false)
            .boxed(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_names_are_valid_filters() {
        for level in ["error", "warn", "info", "debug", "trace", "repwatch=debug"] {
            assert!(
                EnvFilter::try_new(level).is_ok(),
                "{} should be a valid filter",
                level
            );
        }
    }

    #[test]
    fn open_log_file_appends() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("checker.log");

        writeln!(open_log_file(&path).unwrap(), "first").unwrap();
        writeln!(open_log_file(&path).unwrap(), "second").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond\n");
    }

    #[test]
    fn open_log_file_reports_missing_directory() {
        let err = open_log_file(Path::new("/nonexistent-dir/checker.log")).unwrap_err();
        assert!(matches!(err, DomainError::IoError(_)));
    }
}
