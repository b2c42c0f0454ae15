use crate::ports::ReputationFetcher;
use crate::services::{classifier, courtesy_pause};
use repwatch_domain::config::DelayRange;
use repwatch_domain::{FetchError, ReputationService, SecurityStatus, StatusRecord};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

const DEFAULT_SERVICE_DELAY_MIN_MS: u64 = 3000;
const DEFAULT_SERVICE_DELAY_MAX_MS: u64 = 5000;

/// Use case: check one domain against both reputation services.
///
/// Google is queried first, then after a courtesy pause Spamhaus. A failed
/// lookup on one service records ERROR for that service only; the other is
/// still queried and classified.
pub struct CheckDomainUseCase {
    fetcher: Arc<dyn ReputationFetcher>,
    service_delay: DelayRange,
}

impl CheckDomainUseCase {
    pub fn new(fetcher: Arc<dyn ReputationFetcher>) -> Self {
        Self {
            fetcher,
            service_delay: DelayRange::from_millis(
                DEFAULT_SERVICE_DELAY_MIN_MS,
                DEFAULT_SERVICE_DELAY_MAX_MS,
            ),
        }
    }

    pub fn with_service_delay(mut self, delay: DelayRange) -> Self {
        self.service_delay = delay;
        self
    }

    pub async fn execute(&self, domain: &str) -> StatusRecord {
        let google_status = self
            .check_service(ReputationService::Google, domain)
            .await;

        courtesy_pause(self.service_delay).await;

        let spamhaus_status = self
            .check_service(ReputationService::Spamhaus, domain)
            .await;

        info!(
            domain = %domain,
            google = %google_status,
            spamhaus = %spamhaus_status,
            "Domain checked"
        );

        StatusRecord::now(google_status, spamhaus_status)
    }

    /// Fetch and classify. Fetch failures always yield ERROR.
    pub async fn check_service(&self, service: ReputationService, domain: &str) -> SecurityStatus {
        match self.fetcher.fetch(service, domain).await {
            Ok(body) => {
                let status = classifier::classify(service, &body);
                debug!(
                    service = %service,
                    domain = %domain,
                    status = %status,
                    body_len = body.len(),
                    "Response classified"
                );
                status
            }
            Err(FetchError::HttpStatus(code)) => {
                warn!(
                    service = %service,
                    domain = %domain,
                    status_code = code,
                    "Reputation lookup returned non-200 response"
                );
                SecurityStatus::Error
            }
            Err(e) => {
                error!(
                    service = %service,
                    domain = %domain,
                    error = %e,
                    "Reputation lookup failed"
                );
                SecurityStatus::Error
            }
        }
    }
}
