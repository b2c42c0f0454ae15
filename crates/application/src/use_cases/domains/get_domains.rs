use crate::ports::DomainListRepository;
use repwatch_domain::{DomainError, DomainList};
use std::sync::Arc;
use tracing::debug;

pub struct GetDomainsUseCase {
    repo: Arc<dyn DomainListRepository>,
}

impl GetDomainsUseCase {
    pub fn new(repo: Arc<dyn DomainListRepository>) -> Self {
        Self { repo }
    }

    /// The configured domain list, empty if none has been written yet.
    pub async fn execute(&self) -> Result<DomainList, DomainError> {
        let list = self.repo.load().await?.unwrap_or_default();
        debug!(count = list.len(), "Domain list retrieved");
        Ok(list)
    }
}
