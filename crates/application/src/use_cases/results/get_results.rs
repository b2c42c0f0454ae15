use crate::ports::ResultStoreRepository;
use repwatch_domain::{DomainError, ResultStore};
use std::sync::Arc;
use tracing::debug;

pub struct GetResultsUseCase {
    repo: Arc<dyn ResultStoreRepository>,
}

impl GetResultsUseCase {
    pub fn new(repo: Arc<dyn ResultStoreRepository>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> Result<ResultStore, DomainError> {
        let store = self.repo.load().await?;
        debug!(count = store.len(), "Security results retrieved");
        Ok(store)
    }
}
