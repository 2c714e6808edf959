//! iRail HTTP client.
//!
//! Issues GET requests against the public iRail API, always asking for
//! JSON, and spaces requests out to stay under the API's rate limit.

use std::sync::Arc;
use std::time::Duration;

use serde::de::DeserializeOwned;

use super::error::IrailError;
use super::rate_limit::RateLimiter;
use super::request::IrailRequest;

/// Default base URL for the iRail API.
pub const DEFAULT_BASE_URL: &str = "https://api.irail.be/v1";

/// iRail asks clients to stay at or below 3 requests per second.
pub const DEFAULT_REQUESTS_PER_SECOND: f64 = 3.0;

const USER_AGENT: &str = concat!("irail-mcp/", env!("CARGO_PKG_VERSION"));

/// Configuration for the iRail client.
#[derive(Debug, Clone)]
pub struct IrailConfig {
    /// Base URL for the API (defaults to production iRail)
    pub base_url: String,
    /// Maximum sustained request rate
    pub requests_per_second: f64,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for IrailConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            requests_per_second: DEFAULT_REQUESTS_PER_SECOND,
            timeout_secs: 30,
        }
    }
}

impl IrailConfig {
    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the request rate limit.
    pub fn with_rate_limit(mut self, requests_per_second: f64) -> Self {
        self.requests_per_second = requests_per_second;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// iRail API client.
///
/// Cloning is cheap and clones share one rate limiter.
#[derive(Debug, Clone)]
pub struct IrailClient {
    http: reqwest::Client,
    base_url: String,
    limiter: Arc<RateLimiter>,
}

impl IrailClient {
    /// Create a new iRail client with the given configuration.
    pub fn new(config: IrailConfig) -> Result<Self, IrailError> {
        let limiter = RateLimiter::per_second(config.requests_per_second).ok_or_else(|| {
            IrailError::Config(format!(
                "rate limit must be positive, got {}",
                config.requests_per_second
            ))
        })?;

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limiter: Arc::new(limiter),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the raw JSON body for a request.
    ///
    /// Waits for the rate limiter first. Non-success statuses are mapped
    /// to the matching [`IrailError`] variant.
    pub async fn fetch(&self, request: &IrailRequest) -> Result<String, IrailError> {
        self.limiter.wait().await;

        let url = format!("{}{}", self.base_url, request.endpoint().path());
        tracing::debug!(%url, params = ?request.params(), "iRail request");

        let response = self
            .http
            .get(&url)
            .query(&[("format", "json")])
            .query(request.params())
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%url, status = status.as_u16(), "iRail request failed");
            return Err(IrailError::from_status(status, body));
        }

        Ok(response.text().await?)
    }

    /// Fetch and decode a request.
    pub async fn get<T: DeserializeOwned>(&self, request: &IrailRequest) -> Result<T, IrailError> {
        let body = self.fetch(request).await?;
        parse(&body)
    }
}

/// Decode an iRail JSON body, keeping a prefix of it for diagnostics.
pub(crate) fn parse<T: DeserializeOwned>(body: &str) -> Result<T, IrailError> {
    serde_json::from_str(body).map_err(|e| IrailError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(500).collect()),
    })
}
