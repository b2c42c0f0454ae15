use super::json_file::{read_json, write_json};
use async_trait::async_trait;
use repwatch_application::ports::ResultStoreRepository;
use repwatch_domain::{DomainError, ResultStore, StatusRecord};
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, error, instrument};

const RESULTS_INDENT: &[u8] = b"    ";

/// `security_results.json`, rewritten in full on every save.
pub struct JsonResultStoreRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonResultStoreRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read(&self) -> Result<ResultStore, DomainError> {
        let store: Option<ResultStore> = read_json(&self.path).await.map_err(|e| {
            error!(error = %e, "Failed to load result store");
            DomainError::ResultStoreError(e)
        })?;
        Ok(store.unwrap_or_default())
    }

    async fn write(&self, store: &ResultStore) -> Result<(), DomainError> {
        write_json(&self.path, store, RESULTS_INDENT)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to save result store");
                DomainError::IoError(e)
            })
    }
}

#[async_trait]
impl ResultStoreRepository for JsonResultStoreRepository {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<ResultStore, DomainError> {
        let _guard = self.lock.lock().await;
        self.read().await
    }

    #[instrument(skip(self, store), fields(path = %self.path.display(), records = store.len()))]
    async fn save(&self, store: &ResultStore) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        self.write(store).await?;
        debug!("Result store written");
        Ok(())
    }

    #[instrument(skip(self, record), fields(path = %self.path.display()))]
    async fn upsert(&self, domain: &str, record: StatusRecord) -> Result<(), DomainError> {
        let _guard = self.lock.lock().await;
        let mut store = self.read().await?;
        store.insert(domain.to_string(), record);
        self.write(&store).await
    }
}
