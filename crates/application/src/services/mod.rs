pub mod classifier;
pub mod pacing;

pub use classifier::{classify, classify_google, classify_spamhaus};
pub use pacing::courtesy_pause;
