use chrono::NaiveDate;

use super::{ChangeFreq, SitemapRef, UrlEntry};

/// Relative paths of the site's static pages. The empty path is the home page.
pub const STATIC_ROUTES: [&str; 7] = [
    "", "/about", "/contact", "/faq", "/privacy", "/search", "/terms",
];

/// Priority of contractor detail pages.
pub const CONTRACTOR_PRIORITY: f32 = 0.7;

/// `<url>` entries for every static route.
///
/// The home page is crawled daily at top priority, every other page weekly.
pub fn static_url_entries(base_url: &str, lastmod: NaiveDate) -> Vec<UrlEntry> {
    STATIC_ROUTES
        .iter()
        .map(|route| {
            let is_home = route.is_empty();
            UrlEntry {
                loc: format!("{base_url}{route}"),
                lastmod,
                changefreq: if is_home {
                    ChangeFreq::Daily
                } else {
                    ChangeFreq::Weekly
                },
                priority: if is_home { 1.0 } else { 0.8 },
            }
        })
        .collect()
}

/// `<url>` entry for a contractor detail page.
pub fn contractor_url_entry(base_url: &str, contractor_id: &str, lastmod: NaiveDate) -> UrlEntry {
    UrlEntry {
        loc: format!("{base_url}/contractor/{contractor_id}"),
        lastmod,
        changefreq: ChangeFreq::Weekly,
        priority: CONTRACTOR_PRIORITY,
    }
}

/// `<sitemap>` references to `/sitemap.xml?page=1..=pages`.
pub fn sitemap_page_refs(base_url: &str, lastmod: NaiveDate, pages: u32) -> Vec<SitemapRef> {
    (1..=pages)
        .map(|page| SitemapRef {
            loc: format!("{base_url}/sitemap.xml?page={page}"),
            lastmod,
        })
        .collect()
}

/// Strips a single trailing slash from a configured or request origin.
pub fn normalize_base_url(url: &str) -> &str {
    url.strip_suffix('/').unwrap_or(url)
}
