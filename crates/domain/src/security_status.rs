use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of checking one domain against one reputation service.
///
/// The serialized form is the colour label the results dashboard keys its
/// badges on. The English names are accepted when reading so hand-edited
/// result files still load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecurityStatus {
    #[serde(rename = "绿色", alias = "SAFE")]
    Safe,

    #[serde(rename = "红色", alias = "UNSAFE")]
    Unsafe,

    #[serde(rename = "黄色", alias = "UNKNOWN")]
    Unknown,

    #[serde(rename = "紫色", alias = "ERROR")]
    Error,
}

impl SecurityStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecurityStatus::Safe => "SAFE",
            SecurityStatus::Unsafe => "UNSAFE",
            SecurityStatus::Unknown => "UNKNOWN",
            SecurityStatus::Error => "ERROR",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SAFE" | "绿色" => Some(SecurityStatus::Safe),
            "UNSAFE" | "红色" => Some(SecurityStatus::Unsafe),
            "UNKNOWN" | "黄色" => Some(SecurityStatus::Unknown),
            "ERROR" | "紫色" => Some(SecurityStatus::Error),
            _ => None,
        }
    }
}

impl fmt::Display for SecurityStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reachability of a reputation service, as reported by the connectivity probe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConnectivityStatus {
    #[serde(rename = "正常")]
    Online,

    #[serde(rename = "异常")]
    Offline,
}

impl ConnectivityStatus {
    pub fn is_online(&self) -> bool {
        matches!(self, ConnectivityStatus::Online)
    }
}
