use repwatch_domain::DomainList;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DomainsResponse {
    pub domains: Vec<String>,
}

impl From<DomainList> for DomainsResponse {
    fn from(list: DomainList) -> Self {
        Self {
            domains: list.domains,
        }
    }
}

/// A missing `domain` field is treated as an empty name and rejected by
/// validation.
#[derive(Debug, Clone, Deserialize)]
pub struct AddDomainRequest {
    #[serde(default)]
    pub domain: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDomainResponse {
    pub success: bool,
    pub domain: String,
}
