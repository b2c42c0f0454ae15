use crate::reputation_service::ReputationService;
use serde::{Deserialize, Serialize};

/// Where a reputation service is queried and which query parameter carries
/// the domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ServiceEndpoint {
    pub base_url: String,
    pub query_param: String,
}

impl ServiceEndpoint {
    pub fn new(base_url: impl Into<String>, query_param: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            query_param: query_param.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServicesConfig {
    #[serde(default = "default_google")]
    pub google: ServiceEndpoint,

    #[serde(default = "default_spamhaus")]
    pub spamhaus: ServiceEndpoint,
}

impl ServicesConfig {
    pub fn endpoint(&self, service: ReputationService) -> &ServiceEndpoint {
        match service {
            ReputationService::Google => &self.google,
            ReputationService::Spamhaus => &self.spamhaus,
        }
    }
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            google: default_google(),
            spamhaus: default_spamhaus(),
        }
    }
}

fn default_google() -> ServiceEndpoint {
    ServiceEndpoint::new(
        "https://transparencyreport.google.com/safe-browsing/search",
        "url",
    )
}

fn default_spamhaus() -> ServiceEndpoint {
    ServiceEndpoint::new("https://check.spamhaus.org/listed/", "domain")
}
