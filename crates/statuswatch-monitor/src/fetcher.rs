//! Status endpoint fetcher.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use statuswatch_config::MonitorConfig;

use crate::error::{FetchError, MonitorError};
use crate::summary::StatusSummary;

/// One network call to a status endpoint, mapped into a summary.
#[async_trait]
pub trait StatusFetcher: Send + Sync {
    async fn fetch(&self) -> Result<StatusSummary, FetchError>;
}

/// Fetches a statuspage.io style `summary.json` over HTTP.
pub struct HttpStatusFetcher {
    client: Client,
    url: Url,
}

impl HttpStatusFetcher {
    /// Create a fetcher for `url` with a per-request timeout.
    pub fn new(url: &str, timeout: Duration, user_agent: &str) -> Result<Self, MonitorError> {
        let url = Url::parse(url)
            .map_err(|e| MonitorError::InvalidConfig(format!("Invalid status URL {}: {}", url, e)))?;

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| MonitorError::Client(e.to_string()))?;

        Ok(Self { client, url })
    }

    pub fn from_config(config: &MonitorConfig) -> Result<Self, MonitorError> {
        Self::new(
            &config.status_url,
            config.request_timeout(),
            &config.user_agent,
        )
    }
}

#[async_trait]
impl StatusFetcher for HttpStatusFetcher {
    async fn fetch(&self) -> Result<StatusSummary, FetchError> {
        debug!(url = %self.url, "Fetching status summary");

        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        StatusSummary::from_payload(&body)
    }
}

#[cfg(test)]
#[path = "fetcher_tests.rs"]
mod tests;
