//! Request-scoped context module.
//!
//! Provides extractors that derive per-request values, such as the base URL
//! for sitemap links, from the request headers and `AppState`.

mod extractor;
mod types;

pub use types::{RequestOrigin, SiteBase};
