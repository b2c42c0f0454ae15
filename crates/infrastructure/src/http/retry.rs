use repwatch_domain::{FetchError, RetryPolicy};
use reqwest::header::RETRY_AFTER;
use reqwest::{Client, Method, Response, StatusCode, Url};
use std::time::Duration;
use tracing::debug;

/// Send a GET, re-sending while the policy asks for it.
///
/// Returns the last response received, whatever its status. Only a failure
/// to get any response at all is an error, and it is not retried.
pub async fn send_with_retry(
    client: &Client,
    url: &Url,
    policy: &RetryPolicy,
) -> Result<Response, FetchError> {
    let method = Method::GET;
    let mut attempt: u32 = 1;

    loop {
        let response = client
            .request(method.clone(), url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(describe(&e)))?;

        let status = response.status().as_u16();
        if !policy.should_retry(method.as_str(), status, attempt) {
            return Ok(response);
        }

        let wait = retry_after_delay(&response, policy)
            .unwrap_or_else(|| policy.backoff_after(attempt));

        debug!(
            url = %url,
            status,
            attempt,
            max_attempts = policy.max_attempts,
            wait_ms = wait.as_millis() as u64,
            "Retrying lookup"
        );

        drop(response);
        tokio::time::sleep(wait).await;
        attempt += 1;
    }
}

/// Delay requested by the server through `Retry-After: <seconds>`, for the
/// statuses where that header is meaningful. Capped at the policy's
/// maximum backoff.
pub fn retry_after_delay(response: &Response, policy: &RetryPolicy) -> Option<Duration> {
    if !policy.respect_retry_after {
        return None;
    }
    if !matches!(
        response.status(),
        StatusCode::TOO_MANY_REQUESTS | StatusCode::SERVICE_UNAVAILABLE
    ) {
        return None;
    }

    let secs = response
        .headers()
        .get(RETRY_AFTER)?
        .to_str()
        .ok()?
        .trim()
        .parse::<u64>()
        .ok()?;

    Some(Duration::from_secs(secs).min(policy.backoff_max()))
}

fn describe(err: &reqwest::Error) -> String {
    if err.is_timeout() {
        format!("timed out: {}", err)
    } else if err.is_connect() {
        format!("connection failed: {}", err)
    } else {
        err.to_string()
    }
}
