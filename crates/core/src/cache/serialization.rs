//! Cache encoding for rendered sitemaps.
//!
//! Values are stored as JSON so a cached entry can be inspected by hand. The
//! page statistics travel with the XML, so a cache hit reproduces the same
//! response headers as a fresh render.

use crate::sitemap::RenderedSitemap;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SerializationError {
    #[error("Failed to encode sitemap for the cache: {0}")]
    Encode(String),
    #[error("Cached sitemap is unreadable: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, SerializationError>;

/// Serializes a rendered sitemap to JSON bytes.
pub fn serialize_sitemap(sitemap: &RenderedSitemap) -> Result<Vec<u8>> {
    serde_json::to_vec(sitemap).map_err(|e| SerializationError::Encode(e.to_string()))
}

/// Deserializes JSON bytes to a rendered sitemap.
pub fn deserialize_sitemap(bytes: &[u8]) -> Result<RenderedSitemap> {
    serde_json::from_slice(bytes).map_err(|e| SerializationError::Decode(e.to_string()))
}
