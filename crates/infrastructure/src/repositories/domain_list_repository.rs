use super::json_file::{read_json, write_json};
use async_trait::async_trait;
use repwatch_application::ports::DomainListRepository;
use repwatch_domain::{DomainError, DomainList};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{error, info, instrument};

const DOMAINS_INDENT: &[u8] = b"  ";

/// `domains.json` as `{"domains": [...]}`.
pub struct JsonDomainListRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonDomainListRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<Option<DomainList>, DomainError> {
        read_json(&self.path).await.map_err(|e| {
            error!(error = %e, "Failed to load domain list");
            DomainError::DomainListError(e)
        })
    }

    async fn write(&self, list: &DomainList) -> Result<(), DomainError> {
        write_json(&self.path, list, DOMAINS_INDENT)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to save domain list");
                DomainError::IoError(e)
            })
    }
}

#[async_trait]
impl DomainListRepository for JsonDomainListRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<Option<DomainList>, DomainError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn append(&self, domain: &str) -> Result<bool, DomainError> {
        let _guard = self.lock.lock().await;

        let mut list = self.read().await?.unwrap_or_default();
        if !list.push(domain.to_string()) {
            return Ok(false);
        }
        self.write(&list).await?;

        info!(domain = %domain, domains = list.len(), "Domain added to list");
        Ok(true)
    }
}
