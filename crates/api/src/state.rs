use repwatch_application::use_cases::{
    AddDomainUseCase, CheckConnectivityUseCase, GetDomainsUseCase, GetResultsUseCase,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub get_domains: Arc<GetDomainsUseCase>,
    pub add_domain: Arc<AddDomainUseCase>,
    pub get_results: Arc<GetResultsUseCase>,
    pub check_connectivity: Arc<CheckConnectivityUseCase>,
}
