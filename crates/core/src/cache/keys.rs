use crate::sitemap::SitemapSelector;

/// Prefix shared by every sitemap cache key.
pub const SITEMAP_KEY_PREFIX: &str = "sitemap";

/// Returns the cache key for a sitemap document.
///
/// Each selector gets its own key, so every page expires independently.
///
/// # Examples
///
/// ```
/// use fencesite_core::cache::sitemap_key;
/// use fencesite_core::sitemap::SitemapSelector;
///
/// assert_eq!(sitemap_key(&SitemapSelector::Index), "sitemap:index");
/// assert_eq!(sitemap_key(&SitemapSelector::Static), "sitemap:page:1");
/// assert_eq!(sitemap_key(&SitemapSelector::Contractors(4)), "sitemap:page:4");
/// ```
pub fn sitemap_key(selector: &SitemapSelector) -> String {
    match selector.page() {
        None => format!("{SITEMAP_KEY_PREFIX}:index"),
        Some(page) => format!("{SITEMAP_KEY_PREFIX}:page:{page}"),
    }
}
