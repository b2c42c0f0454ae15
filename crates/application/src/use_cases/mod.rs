pub mod checks;
pub mod connectivity;
pub mod domains;
pub mod results;

pub use checks::{CheckDomainUseCase, CycleReport, RunCheckCycleUseCase};
pub use connectivity::{CheckConnectivityUseCase, ConnectivityReport};
pub use domains::{AddDomainUseCase, GetDomainsUseCase};
pub use results::GetResultsUseCase;
