use repwatch_domain::Config;
use repwatch_infrastructure::repositories::{JsonDomainListRepository, JsonResultStoreRepository};
use std::sync::Arc;

pub struct Repositories {
    pub domains: Arc<JsonDomainListRepository>,
    pub results: Arc<JsonResultStoreRepository>,
}

impl Repositories {
    pub fn new(config: &Config) -> Self {
        Self {
            domains: Arc::new(JsonDomainListRepository::new(&config.checker.domains_file)),
            results: Arc::new(JsonResultStoreRepository::new(&config.checker.results_file)),
        }
    }
}
