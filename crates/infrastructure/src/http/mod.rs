mod fetcher;
mod headers;
mod retry;

pub use fetcher::{HttpReputationFetcher, PROBE_DOMAIN};
pub use headers::browser_headers;
pub use retry::{retry_after_delay, send_with_retry};
