pub mod domain;
pub mod health;

pub use domain::{AddDomainRequest, AddDomainResponse, DomainsResponse};
pub use health::HealthResponse;
