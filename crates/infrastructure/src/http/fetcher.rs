use super::headers::browser_headers;
use super::retry::send_with_retry;
use async_trait::async_trait;
use repwatch_application::ports::ReputationFetcher;
use repwatch_application::services::courtesy_pause;
use repwatch_domain::config::{DelayRange, HttpConfig, ServicesConfig};
use repwatch_domain::{FetchError, ReputationService, RetryPolicy};
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

/// Domain queried by connectivity probes.
pub const PROBE_DOMAIN: &str = "example.com";

/// Reputation lookups over one shared reqwest client.
pub struct HttpReputationFetcher {
    client: Client,
    services: ServicesConfig,
    retry: RetryPolicy,
    request_delay: DelayRange,
}

impl HttpReputationFetcher {
    pub fn new(config: &HttpConfig, services: ServicesConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .default_headers(browser_headers(config)?)
            .timeout(config.timeout())
            .danger_accept_invalid_certs(config.accept_invalid_certs)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            services,
            retry: config.retry.clone(),
            request_delay: config.request_delay(),
        })
    }

    pub fn with_retry_policy(mut self, policy: RetryPolicy) -> Self {
        self.retry = policy;
        self
    }

    /// `<base_url>?<query_param>=<domain>`, with the domain percent-encoded.
    pub fn lookup_url(&self, service: ReputationService, domain: &str) -> Result<Url, FetchError> {
        let endpoint = self.services.endpoint(service);
        Url::parse_with_params(
            &endpoint.base_url,
            [(endpoint.query_param.as_str(), domain)],
        )
        .map_err(|e| {
            FetchError::Client(format!(
                "invalid {} endpoint {}: {}",
                service, endpoint.base_url, e
            ))
        })
    }
}

#[async_trait]
impl ReputationFetcher for HttpReputationFetcher {
    async fn fetch(
        &self,
        service: ReputationService,
        domain: &str,
    ) -> Result<String, FetchError> {
        let url = self.lookup_url(service, domain)?;

        courtesy_pause(self.request_delay).await;

        debug!(service = %service, url = %url, "Sending reputation lookup");

        let response = send_with_retry(&self.client, &url, &self.retry).await?;
        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(format!("failed to read body: {}", e)))?;

        debug!(
            service = %service,
            body_len = body.len(),
            "Reputation lookup response received"
        );

        Ok(body)
    }

    async fn probe(&self, service: ReputationService) -> Result<(), FetchError> {
        let url = self.lookup_url(service, PROBE_DOMAIN)?;

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(FetchError::HttpStatus(status.as_u16()))
        }
    }
}
