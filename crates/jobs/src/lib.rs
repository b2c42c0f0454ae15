pub mod runner;
pub mod security_check;

pub use runner::JobRunner;
pub use security_check::{CycleOutcome, SecurityCheckJob};
