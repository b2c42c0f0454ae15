use repwatch_domain::config::DelayRange;
use std::time::Duration;
use tracing::trace;

/// Uniform sample from `range`.
pub fn sample_delay(range: DelayRange) -> Duration {
    range.at(fastrand::f64())
}

/// Sleep for a random duration in `range`, spacing out requests to the
/// reputation services so they do not throttle us. A zero range returns
/// immediately.
pub async fn courtesy_pause(range: DelayRange) {
    if range.is_zero() {
        return;
    }
    let delay = sample_delay(range);
    trace!(delay_ms = delay.as_millis() as u64, "Courtesy pause");
    tokio::time::sleep(delay).await;
}
