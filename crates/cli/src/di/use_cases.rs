use super::Repositories;
use repwatch_application::ports::ReputationFetcher;
use repwatch_application::use_cases::{
    AddDomainUseCase, CheckConnectivityUseCase, CheckDomainUseCase, GetDomainsUseCase,
    GetResultsUseCase, RunCheckCycleUseCase,
};
use repwatch_domain::Config;
use repwatch_infrastructure::http::HttpReputationFetcher;
use std::sync::Arc;

pub struct UseCases {
    pub run_check_cycle: Arc<RunCheckCycleUseCase>,
    pub get_domains: Arc<GetDomainsUseCase>,
    pub add_domain: Arc<AddDomainUseCase>,
    pub get_results: Arc<GetResultsUseCase>,
    pub check_connectivity: Arc<CheckConnectivityUseCase>,
}

impl UseCases {
    pub fn new(repos: &Repositories, config: &Config) -> anyhow::Result<Self> {
        let fetcher: Arc<dyn ReputationFetcher> = Arc::new(HttpReputationFetcher::new(
            &config.http,
            config.services.clone(),
        )?);

        let check_domain = Arc::new(
            CheckDomainUseCase::new(fetcher.clone())
                .with_service_delay(config.checker.service_delay()),
        );

        Ok(Self {
            run_check_cycle: Arc::new(RunCheckCycleUseCase::new(
                repos.domains.clone(),
                repos.results.clone(),
                check_domain,
            )),
            get_domains: Arc::new(GetDomainsUseCase::new(repos.domains.clone())),
            add_domain: Arc::new(AddDomainUseCase::new(
                repos.domains.clone(),
                repos.results.clone(),
            )),
            get_results: Arc::new(GetResultsUseCase::new(repos.results.clone())),
            check_connectivity: Arc::new(CheckConnectivityUseCase::new(fetcher)),
        })
    }
}
