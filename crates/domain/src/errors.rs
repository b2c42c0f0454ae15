use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Domain already exists: {0}")]
    DomainAlreadyExists(String),

    #[error("Domain list error: {0}")]
    DomainListError(String),

    #[error("Result store error: {0}")]
    ResultStoreError(String),

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Why a reputation lookup produced no classifiable body.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Final response after retries was not HTTP 200.
    #[error("HTTP status {0}")]
    HttpStatus(u16),

    /// Timeout, connection, DNS or body read failure.
    #[error("transport error: {0}")]
    Transport(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}
