use crate::ports::ReputationFetcher;
use repwatch_domain::{ConnectivityStatus, ReputationService};
use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConnectivityReport {
    pub google: ConnectivityStatus,
    pub spamhaus: ConnectivityStatus,
}

/// Use case: can the reputation services be reached from here at all?
pub struct CheckConnectivityUseCase {
    fetcher: Arc<dyn ReputationFetcher>,
}

impl CheckConnectivityUseCase {
    pub fn new(fetcher: Arc<dyn ReputationFetcher>) -> Self {
        Self { fetcher }
    }

    pub async fn execute(&self) -> ConnectivityReport {
        let google = self.probe(ReputationService::Google).await;
        let spamhaus = self.probe(ReputationService::Spamhaus).await;

        info!(?google, ?spamhaus, "Connectivity probe finished");
        ConnectivityReport { google, spamhaus }
    }

    async fn probe(&self, service: ReputationService) -> ConnectivityStatus {
        match self.fetcher.probe(service).await {
            Ok(()) => ConnectivityStatus::Online,
            Err(e) => {
                warn!(service = %service, error = %e, "Reputation service unreachable");
                ConnectivityStatus::Offline
            }
        }
    }
}
