pub mod add_domain;
pub mod get_domains;

pub use add_domain::AddDomainUseCase;
pub use get_domains::GetDomainsUseCase;
