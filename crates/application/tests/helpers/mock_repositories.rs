#![allow(dead_code)]

use async_trait::async_trait;
use repwatch_application::ports::{
    DomainListRepository, ReputationFetcher, ResultStoreRepository,
};
use repwatch_domain::{
    DomainError, DomainList, FetchError, ReputationService, ResultStore, SecurityStatus,
    StatusRecord,
};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

pub const GOOGLE_SAFE_BODY: &str = "<html><body>No unsafe content found here</body></html>";
pub const GOOGLE_UNSAFE_BODY: &str = "<html><body>Unsafe content found</body></html>";
pub const SPAMHAUS_SAFE_BODY: &str = "example.com is not listed in any zone";
pub const SPAMHAUS_LISTED_BODY: &str = "example.com is listed in the DBL";

type FetchResponse = Result<String, FetchError>;

pub struct MockReputationFetcher {
    defaults: Arc<RwLock<HashMap<ReputationService, FetchResponse>>>,
    per_domain: Arc<RwLock<HashMap<(ReputationService, String), FetchResponse>>>,
    probes: Arc<RwLock<HashMap<ReputationService, Result<(), FetchError>>>>,
    calls: Arc<RwLock<Vec<(ReputationService, String)>>>,
    fetch_count: Arc<AtomicU64>,
}

impl MockReputationFetcher {
    pub fn new() -> Self {
        Self {
            defaults: Arc::new(RwLock::new(HashMap::new())),
            per_domain: Arc::new(RwLock::new(HashMap::new())),
            probes: Arc::new(RwLock::new(HashMap::new())),
            calls: Arc::new(RwLock::new(Vec::new())),
            fetch_count: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Both services answer with their SAFE page for every domain.
    pub async fn all_safe() -> Self {
        let mock = Self::new();
        mock.respond(ReputationService::Google, Ok(GOOGLE_SAFE_BODY.to_string()))
            .await;
        mock.respond(
            ReputationService::Spamhaus,
            Ok(SPAMHAUS_SAFE_BODY.to_string()),
        )
        .await;
        mock
    }

    pub async fn respond(&self, service: ReputationService, response: FetchResponse) {
        self.defaults.write().await.insert(service, response);
    }

    pub async fn respond_for(
        &self,
        service: ReputationService,
        domain: &str,
        response: FetchResponse,
    ) {
        self.per_domain
            .write()
            .await
            .insert((service, domain.to_string()), response);
    }

    pub async fn set_probe(&self, service: ReputationService, result: Result<(), FetchError>) {
        self.probes.write().await.insert(service, result);
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::Relaxed)
    }

    pub async fn calls(&self) -> Vec<(ReputationService, String)> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl ReputationFetcher for MockReputationFetcher {
    async fn fetch(
        &self,
        service: ReputationService,
        domain: &str,
    ) -> Result<String, FetchError> {
        self.fetch_count.fetch_add(1, Ordering::Relaxed);
        self.calls
            .write()
            .await
            .push((service, domain.to_string()));

        if let Some(response) = self
            .per_domain
            .read()
            .await
            .get(&(service, domain.to_string()))
        {
            return response.clone();
        }
        self.defaults
            .read()
            .await
            .get(&service)
            .cloned()
            .unwrap_or_else(|| Err(FetchError::Transport("no response configured".to_string())))
    }

    async fn probe(&self, service: ReputationService) -> Result<(), FetchError> {
        self.probes
            .read()
            .await
            .get(&service)
            .cloned()
            .unwrap_or(Ok(()))
    }
}

pub struct MockDomainListRepository {
    list: Arc<RwLock<Option<DomainList>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockDomainListRepository {
    pub fn new() -> Self {
        Self {
            list: Arc::new(RwLock::new(None)),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_domains(domains: &[&str]) -> Self {
        let list = DomainList::new(domains.iter().map(|d| d.to_string()).collect());
        Self {
            list: Arc::new(RwLock::new(Some(list))),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn set_domains(&self, domains: &[&str]) {
        *self.list.write().await = Some(DomainList::new(
            domains.iter().map(|d| d.to_string()).collect(),
        ));
    }

    pub async fn set_should_fail(&self, fail: bool) {
        *self.should_fail.write().await = fail;
    }

    pub async fn current(&self) -> Option<DomainList> {
        self.list.read().await.clone()
    }
}

#[async_trait]
impl DomainListRepository for MockDomainListRepository {
    async fn load(&self) -> Result<Option<DomainList>, DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::DomainListError(
                "malformed domain list".to_string(),
            ));
        }
        Ok(self.list.read().await.clone())
    }

    async fn append(&self, domain: &str) -> Result<bool, DomainError> {
        let mut guard = self.list.write().await;
        let list = guard.get_or_insert_with(DomainList::default);
        Ok(list.push(domain.to_string()))
    }
}

pub struct MockResultStoreRepository {
    store: Arc<RwLock<ResultStore>>,
    save_count: Arc<AtomicU64>,
    fail_saves: Arc<RwLock<bool>>,
}

impl MockResultStoreRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(ResultStore::new())),
            save_count: Arc::new(AtomicU64::new(0)),
            fail_saves: Arc::new(RwLock::new(false)),
        }
    }

    pub async fn with_records(records: Vec<(&str, StatusRecord)>) -> Self {
        let repo = Self::new();
        {
            let mut store = repo.store.write().await;
            for (domain, record) in records {
                store.insert(domain.to_string(), record);
            }
        }
        repo
    }

    pub async fn set_fail_saves(&self, fail: bool) {
        *self.fail_saves.write().await = fail;
    }

    pub fn save_count(&self) -> u64 {
        self.save_count.load(Ordering::Relaxed)
    }

    pub async fn snapshot(&self) -> ResultStore {
        self.store.read().await.clone()
    }
}

#[async_trait]
impl ResultStoreRepository for MockResultStoreRepository {
    async fn load(&self) -> Result<ResultStore, DomainError> {
        Ok(self.store.read().await.clone())
    }

    async fn save(&self, store: &ResultStore) -> Result<(), DomainError> {
        if *self.fail_saves.read().await {
            return Err(DomainError::IoError("disk full".to_string()));
        }
        self.save_count.fetch_add(1, Ordering::Relaxed);
        *self.store.write().await = store.clone();
        Ok(())
    }

    async fn upsert(&self, domain: &str, record: StatusRecord) -> Result<(), DomainError> {
        self.store
            .write()
            .await
            .insert(domain.to_string(), record);
        Ok(())
    }
}

pub fn make_record(google: SecurityStatus, spamhaus: SecurityStatus, timestamp: &str) -> StatusRecord {
    StatusRecord {
        google_status: google,
        spamhaus_status: spamhaus,
        timestamp: timestamp.to_string(),
    }
}
