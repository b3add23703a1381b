use async_trait::async_trait;

use super::{FeedError, FeedResponse};

/// HTTP source of the contractor dataset.
#[async_trait]
pub trait ContractorFeed: Send + Sync {
    /// Fetches `path` relative to the feed's origin.
    ///
    /// Non-2xx statuses are returned as responses, not errors; only failures
    /// to obtain a response at all are [`FeedError`]s.
    async fn fetch(&self, path: &str) -> Result<FeedResponse, FeedError>;
}
