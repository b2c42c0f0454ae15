mod domain_list_repository;
mod reputation_fetcher;
mod result_store_repository;

pub use domain_list_repository::DomainListRepository;
pub use reputation_fetcher::ReputationFetcher;
pub use result_store_repository::ResultStoreRepository;
