use serde::{Deserialize, Serialize};

const MAX_DOMAIN_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Contents of `domains.json`: `{"domains": [...]}`, checked in list order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DomainList {
    #[serde(default)]
    pub domains: Vec<String>,
}

impl DomainList {
    pub fn new(domains: Vec<String>) -> Self {
        Self { domains }
    }

    pub fn len(&self) -> usize {
        self.domains.len()
    }

    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    pub fn contains(&self, domain: &str) -> bool {
        self.domains.iter().any(|d| d == domain)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.domains.iter().map(String::as_str)
    }

    /// Appends `domain`, returning `false` if it was already listed.
    pub fn push(&mut self, domain: String) -> bool {
        if self.contains(&domain) {
            return false;
        }
        self.domains.push(domain);
        true
    }

    /// Validates a hostname before it is added to the list.
    ///
    /// Accepts one or more dot-terminated labels of 1-63 alphanumerics or
    /// inner hyphens, followed by an alphabetic TLD of at least two letters.
    pub fn validate_domain(domain: &str) -> Result<(), String> {
        if domain.is_empty() {
            return Err("Domain cannot be empty".to_string());
        }
        if domain.len() > MAX_DOMAIN_LEN {
            return Err(format!(
                "Domain cannot exceed {} characters",
                MAX_DOMAIN_LEN
            ));
        }

        let labels: Vec<&str> = domain.split('.').collect();
        let Some((tld, hosts)) = labels.split_last() else {
            return Err("Invalid domain format".to_string());
        };
        if hosts.is_empty() {
            return Err(format!("Invalid domain format: '{}' has no TLD", domain));
        }

        if tld.len() < 2 || !tld.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(format!("Invalid domain format: bad TLD '{}'", tld));
        }

        for label in hosts {
            if !is_valid_label(label) {
                return Err(format!("Invalid domain format: bad label '{}'", label));
            }
        }

        Ok(())
    }
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
}

impl<'a> IntoIterator for &'a DomainList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.domains.iter()
    }
}
