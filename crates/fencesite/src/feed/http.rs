//! Contractor feed fetched over HTTP.

use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;

use fencesite_core::dataset::{ContractorFeed, FeedError, FeedResponse};

/// Fetches dataset resources relative to a fixed origin.
#[derive(Debug, Clone)]
pub struct HttpFeed {
    client: reqwest::Client,
    origin: String,
}

impl HttpFeed {
    /// Creates a feed for `origin`.
    ///
    /// Requests never time out unless `timeout` is given.
    pub fn new(origin: &str, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            origin: origin.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.origin, path)
    }
}

#[async_trait]
impl ContractorFeed for HttpFeed {
    async fn fetch(&self, path: &str) -> Result<FeedResponse, FeedError> {
        let url = self.url(path);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FeedError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| FeedError::Body(e.to_string()))?;

        tracing::debug!(url = %url, status = status.as_u16(), bytes = body.len(), "Fetched dataset resource");

        Ok(FeedResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
