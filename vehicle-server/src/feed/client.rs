//! HTTP feed client.

use super::error::FeedError;
use super::types::FeedSnapshot;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the HTTP feed client.
#[derive(Debug, Clone)]
pub struct FeedConfig {
    /// URL of the snapshot endpoint.
    pub url: String,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl FeedConfig {
    /// Create a new config for the given snapshot URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client for the vehicle-position snapshot endpoint.
#[derive(Debug, Clone)]
pub struct FeedClient {
    http: reqwest::Client,
    url: String,
}

impl FeedClient {
    /// Create a new feed client with the given configuration.
    pub fn new(config: FeedConfig) -> Result<Self, FeedError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Fetch the current snapshot document.
    pub async fn fetch_snapshot(&self) -> Result<FeedSnapshot, FeedError> {
        let response = self.http.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }
}
