pub mod domain_list_repository;
pub mod json_file;
pub mod result_store_repository;

pub use domain_list_repository::JsonDomainListRepository;
pub use result_store_repository::JsonResultStoreRepository;
