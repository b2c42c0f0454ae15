use async_trait::async_trait;
use repwatch_domain::{DomainError, ResultStore, StatusRecord};

#[async_trait]
pub trait ResultStoreRepository: Send + Sync {
    /// Current results; a store that was never written is empty.
    async fn load(&self) -> Result<ResultStore, DomainError>;

    /// Overwrite the persisted store with `store`.
    async fn save(&self, store: &ResultStore) -> Result<(), DomainError>;

    /// Replace the record for a single domain, leaving the others untouched.
    async fn upsert(&self, domain: &str, record: StatusRecord) -> Result<(), DomainError>;
}
