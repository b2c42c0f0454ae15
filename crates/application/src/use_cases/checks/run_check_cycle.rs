use crate::ports::{DomainListRepository, ResultStoreRepository};
use crate::use_cases::checks::CheckDomainUseCase;
use repwatch_domain::{DomainError, SecurityStatus, StatusRecord};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

/// Summary of one check cycle. Status tallies count individual service
/// verdicts, so each domain contributes two.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    pub domains_checked: usize,
    pub safe: usize,
    pub unsafe_count: usize,
    pub unknown: usize,
    pub errors: usize,
    pub elapsed: Duration,
}

impl CycleReport {
    fn record(&mut self, record: &StatusRecord) {
        self.domains_checked += 1;
        for status in record.statuses() {
            match status {
                SecurityStatus::Safe => self.safe += 1,
                SecurityStatus::Unsafe => self.unsafe_count += 1,
                SecurityStatus::Unknown => self.unknown += 1,
                SecurityStatus::Error => self.errors += 1,
            }
        }
    }
}

/// Use case: one full pass over the domain list.
///
/// The domain list is read fresh, the stored results are loaded (an absent
/// store is empty), each listed domain is checked in order and its record
/// replaced, then the whole store is written back. Records of domains that
/// are no longer listed are carried over unchanged.
pub struct RunCheckCycleUseCase {
    domains: Arc<dyn DomainListRepository>,
    results: Arc<dyn ResultStoreRepository>,
    check_domain: Arc<CheckDomainUseCase>,
}

impl RunCheckCycleUseCase {
    pub fn new(
        domains: Arc<dyn DomainListRepository>,
        results: Arc<dyn ResultStoreRepository>,
        check_domain: Arc<CheckDomainUseCase>,
    ) -> Self {
        Self {
            domains,
            results,
            check_domain,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self) -> Result<CycleReport, DomainError> {
        let started = Instant::now();

        let domains = self.domains.load().await?.ok_or_else(|| {
            DomainError::DomainListError("domain list file does not exist".to_string())
        })?;
        let mut store = self.results.load().await?;

        let total = domains.len();
        info!(
            domains = total,
            stored_records = store.len(),
            "Starting security check cycle"
        );

        let mut report = CycleReport::default();
        for (index, domain) in domains.iter().enumerate() {
            info!(domain = %domain, position = index + 1, total, "Checking domain");
            let record = self.check_domain.execute(domain).await;
            report.record(&record);
            store.insert(domain.to_string(), record);
        }

        self.results.save(&store).await?;
        report.elapsed = started.elapsed();

        info!(
            domains = report.domains_checked,
            safe = report.safe,
            unsafe_count = report.unsafe_count,
            unknown = report.unknown,
            errors = report.errors,
            elapsed_ms = report.elapsed.as_millis() as u64,
            "Security check cycle completed"
        );

        Ok(report)
    }
}
