use thiserror::Error;

/// Errors that can occur when selecting or slicing a sitemap page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SitemapError {
    #[error("Invalid sitemap page: {0:?}")]
    InvalidPage(String),
    #[error("Sitemap page {page} is out of range (start={start}, total={total})")]
    PageOutOfRange {
        page: u32,
        start: usize,
        total: usize,
    },
}

/// Result type for sitemap operations.
pub type Result<T> = std::result::Result<T, SitemapError>;
