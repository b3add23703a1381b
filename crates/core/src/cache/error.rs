use thiserror::Error;

/// Errors reported by a sitemap cache backend.
///
/// Callers treat every variant as a miss and render the sitemap again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CacheError {
    #[error("Sitemap cache backend unavailable: {0}")]
    Unavailable(String),
}

/// Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
