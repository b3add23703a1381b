use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// `<changefreq>` values used by the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeFreq {
    Daily,
    Weekly,
}

impl ChangeFreq {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFreq::Daily => "daily",
            ChangeFreq::Weekly => "weekly",
        }
    }
}

impl fmt::Display for ChangeFreq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One `<url>` element of a urlset document.
#[derive(Debug, Clone, PartialEq)]
pub struct UrlEntry {
    pub loc: String,
    pub lastmod: NaiveDate,
    pub changefreq: ChangeFreq,
    pub priority: f32,
}

/// One `<sitemap>` element of a sitemap index document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitemapRef {
    pub loc: String,
    pub lastmod: NaiveDate,
}

/// Which document a `/sitemap.xml` request resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SitemapSelector {
    /// The sitemap index.
    Index,
    /// Page 1, the static routes.
    Static,
    /// Page 2 and later, contractor detail routes.
    Contractors(u32),
}

impl SitemapSelector {
    /// Page number, or `None` for the index.
    pub fn page(&self) -> Option<u32> {
        match self {
            SitemapSelector::Index => None,
            SitemapSelector::Static => Some(1),
            SitemapSelector::Contractors(page) => Some(*page),
        }
    }
}

impl fmt::Display for SitemapSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.page() {
            None => f.write_str("index"),
            Some(page) => write!(f, "page {page}"),
        }
    }
}

/// Slice of the contractor dataset rendered on one page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowStats {
    /// Number of `<url>` entries on the page.
    pub url_count: usize,
    /// Size of the whole dataset the page was cut from.
    pub contractor_count: usize,
    /// Zero-based index of the first record (inclusive).
    pub start: usize,
    /// Zero-based index past the last record (exclusive).
    pub end: usize,
}

impl WindowStats {
    /// Inclusive range label, e.g. `1000-1999`.
    pub fn range_label(&self) -> String {
        format!("{}-{}", self.start, self.end.saturating_sub(1))
    }
}

/// Page metadata reported through response headers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageStats {
    pub page: u32,
    /// Present on contractor pages only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window: Option<WindowStats>,
}

/// A rendered sitemap document together with its page metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedSitemap {
    pub xml: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<PageStats>,
}
