// crates/network/src/client.rs
//! HTTP client wrapper for the search service

use crate::api;
use crate::error::{NetworkError, NetworkResult};
use reqwest::Client as ReqwestClient;
use serde_json::Value;
use std::time::Duration;
use tunescout_core::ArtistSummary;
use tunescout_resilience::{with_retry, RetryPolicy};

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the search service
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User agent string
    pub user_agent: String,
    /// Maximum number of results kept per search
    pub result_limit: usize,
    /// Retry policy for transient failures
    pub retry_policy: Option<RetryPolicy>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.tunescout.app".to_string(),
            timeout: Duration::from_secs(5),
            user_agent: format!("TuneScout/{}", env!("CARGO_PKG_VERSION")),
            result_limit: 20,
            retry_policy: Some(RetryPolicy::new(3).with_initial_delay(Duration::from_millis(100))),
        }
    }
}

impl ClientConfig {
    /// Sets the base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the result limit
    pub fn with_result_limit(mut self, limit: usize) -> Self {
        self.result_limit = limit;
        self
    }

    /// Sets the retry policy (`None` disables retries)
    pub fn with_retry_policy(mut self, policy: Option<RetryPolicy>) -> Self {
        self.retry_policy = policy;
        self
    }

    /// Sets the retry budget as a count of retries after the first attempt
    /// (0 disables retries)
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.retry_policy = if max_retries == 0 {
            None
        } else {
            Some(RetryPolicy::new(max_retries + 1))
        };
        self
    }
}

/// HTTP client for the artist-search endpoint
#[derive(Clone)]
pub struct Client {
    inner: ReqwestClient,
    config: ClientConfig,
}

impl Client {
    /// Creates a new client with default configuration
    pub fn new() -> NetworkResult<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Creates a new client with custom configuration
    pub fn with_config(config: ClientConfig) -> NetworkResult<Self> {
        let client = ReqwestClient::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(NetworkError::Http)?;

        Ok(Self {
            inner: client,
            config,
        })
    }

    /// Returns the active configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Searches the service for artists matching `query`.
    ///
    /// Transient failures (transport errors, 5xx) are retried per the
    /// configured policy; 4xx responses are returned immediately.
    pub async fn search_artists(&self, query: &str) -> NetworkResult<Vec<ArtistSummary>> {
        let url = api::search_url(&self.config.base_url, query);
        let body = self.get_json_with_retry(&url).await?;

        let mut artists = api::parse_artists(&body);
        artists.truncate(self.config.result_limit);
        Ok(artists)
    }

    /// Fetches a URL as JSON, retrying retryable failures per the policy
    async fn get_json_with_retry(&self, url: &str) -> NetworkResult<Value> {
        match &self.config.retry_policy {
            Some(policy) => {
                with_retry(policy, || self.get_json(url), NetworkError::is_retryable).await
            }
            None => self.get_json(url).await,
        }
    }

    /// Performs a single GET request and parses the body as JSON
    async fn get_json(&self, url: &str) -> NetworkResult<Value> {
        let response = self.inner.get(url).send().await.map_err(NetworkError::Http)?;

        let status = response.status();
        if !status.is_success() {
            return Err(NetworkError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let text = response.text().await.map_err(NetworkError::Http)?;
        serde_json::from_str(&text)
            .map_err(|e| NetworkError::MalformedResponse(format!("JSON parse error: {}", e)))
    }
}
