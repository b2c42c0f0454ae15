pub mod check_domain;
pub mod run_check_cycle;

pub use check_domain::CheckDomainUseCase;
pub use run_check_cycle::{CycleReport, RunCheckCycleUseCase};
