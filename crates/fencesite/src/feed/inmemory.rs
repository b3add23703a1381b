//! Canned contractor feed for tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use fencesite_core::dataset::{ContractorFeed, FeedError, FeedResponse};

/// Serves fixed responses by path and counts fetches.
///
/// Paths without a configured response answer `404 Not Found`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeed {
    responses: Arc<RwLock<HashMap<String, Result<FeedResponse, FeedError>>>>,
    fetches: Arc<AtomicUsize>,
}

impl InMemoryFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers `path` with `200 OK` and `body`.
    pub fn with_body(self, path: &str, body: impl Into<String>) -> Self {
        self.with_status(path, 200, "OK", body)
    }

    /// Answers `path` with an arbitrary status.
    pub fn with_status(
        self,
        path: &str,
        status: u16,
        status_text: &str,
        body: impl Into<String>,
    ) -> Self {
        let response = FeedResponse {
            status,
            status_text: status_text.to_string(),
            body: body.into(),
        };
        self.set(path, Ok(response));
        self
    }

    /// Fails `path` with a transport error.
    pub fn with_error(self, path: &str, message: &str) -> Self {
        self.set(path, Err(FeedError::Transport(message.to_string())));
        self
    }

    /// Replaces the response for `path` on a shared feed.
    pub fn set_body(&self, path: &str, body: impl Into<String>) {
        self.set(
            path,
            Ok(FeedResponse {
                status: 200,
                status_text: "OK".to_string(),
                body: body.into(),
            }),
        );
    }

    /// Number of fetches served so far.
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn set(&self, path: &str, response: Result<FeedResponse, FeedError>) {
        self.responses
            .write()
            .expect("Failed to acquire write lock")
            .insert(path.to_string(), response);
    }
}

#[async_trait]
impl ContractorFeed for InMemoryFeed {
    async fn fetch(&self, path: &str) -> Result<FeedResponse, FeedError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);

        self.responses
            .read()
            .expect("Failed to acquire read lock")
            .get(path)
            .cloned()
            .unwrap_or_else(|| {
                Ok(FeedResponse {
                    status: 404,
                    status_text: "Not Found".to_string(),
                    body: String::new(),
                })
            })
    }
}
