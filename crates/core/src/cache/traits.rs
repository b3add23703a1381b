use async_trait::async_trait;

use super::Result;

/// Byte store for rendered sitemap documents.
///
/// Entries are never removed explicitly: a forced refresh overwrites them
/// and the backend evicts the rest.
///
/// Expiry is a property of the backend, configured when it is built, so
/// callers only ever see fresh values.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a fresh value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache, stamping it with the current time.
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;
}
