//! repwatch domain layer
pub mod config;
pub mod domain_list;
pub mod errors;
pub mod reputation_service;
pub mod security_status;
pub mod status_record;

pub use config::{CliOverrides, Config, RetryPolicy};
pub use domain_list::DomainList;
pub use errors::{DomainError, FetchError};
pub use reputation_service::ReputationService;
pub use security_status::{ConnectivityStatus, SecurityStatus};
pub use status_record::{ResultStore, StatusRecord, TIMESTAMP_FORMAT};
