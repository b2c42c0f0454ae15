#![allow(dead_code)]

use async_trait::async_trait;
use repwatch_application::ports::{
    DomainListRepository, ReputationFetcher, ResultStoreRepository,
};
use repwatch_application::use_cases::{CheckDomainUseCase, RunCheckCycleUseCase};
use repwatch_domain::config::DelayRange;
use repwatch_domain::{
    DomainError, DomainList, FetchError, ReputationService, ResultStore, StatusRecord,
};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

/// Answers every lookup with the service's SAFE page, optionally after a
/// delay, and panics when asked about `panic_on`.
pub struct MockReputationFetcher {
    delay: Duration,
    panic_on: Option<String>,
    fetch_count: Arc<AtomicU64>,
}

impl MockReputationFetcher {
    pub fn new() -> Self {
        Self {
            delay: Duration::ZERO,
            panic_on: None,
            fetch_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn panicking_on(mut self, domain: &str) -> Self {
        self.panic_on = Some(domain.to_string());
        self
    }

    pub fn fetch_count(&self) -> u64 {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ReputationFetcher for MockReputationFetcher {
    async fn fetch(
        &self,
        service: ReputationService,
        domain: &str,
    ) -> Result<String, FetchError> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        if self.panic_on.as_deref() == Some(domain) {
            panic!("fetcher exploded on {}", domain);
        }
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        Ok(match service {
            ReputationService::Google => "No unsafe content found".to_string(),
            ReputationService::Spamhaus => "is not listed".to_string(),
        })
    }

    async fn probe(&self, _service: ReputationService) -> Result<(), FetchError> {
        Ok(())
    }
}

pub struct MockDomainListRepository {
    list: Arc<RwLock<Option<DomainList>>>,
    should_fail: Arc<AtomicBool>,
}

impl MockDomainListRepository {
    pub fn with_domains(domains: &[&str]) -> Self {
        let list = DomainList::new(domains.iter().map(|d| d.to_string()).collect());
        Self {
            list: Arc::new(RwLock::new(Some(list))),
            should_fail: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn set_should_fail(&self, fail: bool) {
        self.should_fail.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl DomainListRepository for MockDomainListRepository {
    async fn load(&self) -> Result<Option<DomainList>, DomainError> {
        if self.should_fail.load(Ordering::SeqCst) {
            return Err(DomainError::DomainListError(
                "malformed domain list".to_string(),
            ));
        }
        Ok(self.list.read().await.clone())
    }

    async fn append(&self, domain: &str) -> Result<bool, DomainError> {
        let mut guard = self.list.write().await;
        Ok(guard
            .get_or_insert_with(DomainList::default)
            .push(domain.to_string()))
    }
}

pub struct MockResultStoreRepository {
    store: Arc<RwLock<ResultStore>>,
    save_count: Arc<AtomicU64>,
}

impl MockResultStoreRepository {
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(ResultStore::new())),
            save_count: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn save_count(&self) -> u64 {
        self.save_count.load(Ordering::SeqCst)
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
        self.save_count.fetch_add(1, Ordering::SeqCst);
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

/// Cycle wired to the mocks with courtesy delays disabled.
pub fn make_run_cycle(
    fetcher: Arc<MockReputationFetcher>,
    domains: Arc<MockDomainListRepository>,
    results: Arc<MockResultStoreRepository>,
) -> Arc<RunCheckCycleUseCase> {
    let check_domain =
        Arc::new(CheckDomainUseCase::new(fetcher).with_service_delay(DelayRange::none()));
    Arc::new(RunCheckCycleUseCase::new(domains, results, check_domain))
}
