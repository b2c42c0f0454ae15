use async_trait::async_trait;
use repwatch_domain::{FetchError, ReputationService};

#[async_trait]
pub trait ReputationFetcher: Send + Sync {
    /// Look `domain` up on `service`, including courtesy delay and retries.
    ///
    /// Returns the body only for a final HTTP 200; any other final status is
    /// `FetchError::HttpStatus`, and transport failures are
    /// `FetchError::Transport`.
    async fn fetch(&self, service: ReputationService, domain: &str)
        -> Result<String, FetchError>;

    /// One attempt against the service, no delay and no retry.
    async fn probe(&self, service: ReputationService) -> Result<(), FetchError>;
}
