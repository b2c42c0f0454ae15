use async_trait::async_trait;
use repwatch_domain::{DomainError, DomainList};

#[async_trait]
pub trait DomainListRepository: Send + Sync {
    /// Read the list fresh from storage. `Ok(None)` if it does not exist yet.
    async fn load(&self) -> Result<Option<DomainList>, DomainError>;

    /// Append `domain`, creating the list if needed. Returns `false` when the
    /// domain was already present and nothing was written.
    async fn append(&self, domain: &str) -> Result<bool, DomainError>;
}
