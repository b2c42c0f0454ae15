pub mod checker;
pub mod errors;
pub mod http;
pub mod logging;
pub mod retry;
pub mod root;
pub mod server;
pub mod services;

pub use checker::{CheckerConfig, DelayRange};
pub use errors::ConfigError;
pub use http::HttpConfig;
pub use logging::{LogFormat, LoggingConfig};
pub use retry::RetryPolicy;
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
pub use services::{ServiceEndpoint, ServicesConfig};
