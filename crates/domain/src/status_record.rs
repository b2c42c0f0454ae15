use crate::security_status::SecurityStatus;
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Local-time, second precision.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Persisted results keyed by domain name.
pub type ResultStore = BTreeMap<String, StatusRecord>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusRecord {
    pub google_status: SecurityStatus,
    pub spamhaus_status: SecurityStatus,
    pub timestamp: String,
}

impl StatusRecord {
    pub fn new(
        google_status: SecurityStatus,
        spamhaus_status: SecurityStatus,
        checked_at: DateTime<Local>,
    ) -> Self {
        Self {
            google_status,
            spamhaus_status,
            timestamp: checked_at.format(TIMESTAMP_FORMAT).to_string(),
        }
    }

    /// Record stamped with the current local time.
    pub fn now(google_status: SecurityStatus, spamhaus_status: SecurityStatus) -> Self {
        Self::new(google_status, spamhaus_status, Local::now())
    }

    /// Placeholder written for a freshly added domain that has not been checked yet.
    pub fn pending() -> Self {
        Self::now(SecurityStatus::Error, SecurityStatus::Error)
    }

    pub fn checked_at(&self) -> Option<DateTime<Local>> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT)
            .ok()
            .and_then(|naive| Local.from_local_datetime(&naive).earliest())
    }

    pub fn statuses(&self) -> [SecurityStatus; 2] {
        [self.google_status, self.spamhaus_status]
    }

    pub fn is_safe(&self) -> bool {
        self.statuses().iter().all(|s| *s == SecurityStatus::Safe)
    }
}
