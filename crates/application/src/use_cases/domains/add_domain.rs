use crate::ports::{DomainListRepository, ResultStoreRepository};
use repwatch_domain::{DomainError, DomainList, StatusRecord};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Use case: add a domain to the watch list.
///
/// The new domain gets a placeholder ERROR record so it shows up in the
/// results right away; the next cycle replaces it with real verdicts.
pub struct AddDomainUseCase {
    domains: Arc<dyn DomainListRepository>,
    results: Arc<dyn ResultStoreRepository>,
}

impl AddDomainUseCase {
    pub fn new(
        domains: Arc<dyn DomainListRepository>,
        results: Arc<dyn ResultStoreRepository>,
    ) -> Self {
        Self { domains, results }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, domain: &str) -> Result<String, DomainError> {
        let domain = domain.trim();
        DomainList::validate_domain(domain).map_err(DomainError::InvalidDomainName)?;

        if !self.domains.append(domain).await? {
            warn!(domain = %domain, "Domain already in watch list");
            return Err(DomainError::DomainAlreadyExists(domain.to_string()));
        }

        self.results.upsert(domain, StatusRecord::pending()).await?;

        info!(domain = %domain, "Domain added to watch list");
        Ok(domain.to_string())
    }
}
