//! Pure functions for mapping sitemap errors to HTTP responses.

use super::SitemapError;

/// Plain-text body returned with every sitemap 404.
pub const PAGE_NOT_FOUND_MESSAGE: &str = "Sitemap page not found";

/// Maps a [`SitemapError`] to an HTTP status code.
///
/// Pages that do not exist are explicit 404s rather than empty documents:
///
/// - `InvalidPage` -> 404 (Not Found)
/// - `PageOutOfRange` -> 404 (Not Found)
///
/// # Examples
///
/// ```
/// use fencesite_core::sitemap::{sitemap_error_to_status_code, SitemapError};
///
/// let error = SitemapError::PageOutOfRange { page: 9, start: 7000, total: 10 };
/// assert_eq!(sitemap_error_to_status_code(&error), 404);
/// ```
pub fn sitemap_error_to_status_code(error: &SitemapError) -> u16 {
    match error {
        SitemapError::InvalidPage(_) => 404,
        SitemapError::PageOutOfRange { .. } => 404,
    }
}
