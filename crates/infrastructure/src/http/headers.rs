use repwatch_domain::config::HttpConfig;
use repwatch_domain::FetchError;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION,
    DNT, UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};

const ACCEPT_HTML: &str =
    "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8";

/// Header set sent with every lookup, shaped like a desktop browser's first
/// navigation request.
pub fn browser_headers(config: &HttpConfig) -> Result<HeaderMap, FetchError> {
    let mut headers = HeaderMap::new();

    headers.insert(USER_AGENT, header_value(USER_AGENT, &config.user_agent)?);
    headers.insert(ACCEPT, HeaderValue::from_static(ACCEPT_HTML));
    headers.insert(
        ACCEPT_LANGUAGE,
        header_value(ACCEPT_LANGUAGE, &config.accept_language)?,
    );
    headers.insert(DNT, HeaderValue::from_static("1"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("max-age=0"));

    Ok(headers)
}

fn header_value(name: HeaderName, value: &str) -> Result<HeaderValue, FetchError> {
    HeaderValue::from_str(value)
        .map_err(|e| FetchError::Client(format!("invalid {} header: {}", name, e)))
}
