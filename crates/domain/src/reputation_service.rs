use serde::{Deserialize, Serialize};
use std::fmt;

/// Third-party reputation services every domain is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReputationService {
    /// Google Transparency Report safe-browsing lookup.
    Google,
    /// Spamhaus domain listing lookup.
    Spamhaus,
}

impl ReputationService {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReputationService::Google => "google",
            ReputationService::Spamhaus => "spamhaus",
        }
    }
}

impl fmt::Display for ReputationService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
