//! XML templates for sitemaps.org documents.

use super::{SitemapRef, UrlEntry};

/// Namespace of sitemaps.org protocol 0.9.
pub const SITEMAP_XMLNS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Escape XML special characters in text content.
pub fn xml_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Render a `<urlset>` document.
pub fn render_urlset(entries: &[UrlEntry]) -> String {
    let mut xml = format!("{XML_DECLARATION}\n<urlset xmlns=\"{SITEMAP_XMLNS}\">");

    for entry in entries {
        xml.push_str(&format!(
            r#"
  <url>
    <loc>{loc}</loc>
    <lastmod>{lastmod}</lastmod>
    <changefreq>{changefreq}</changefreq>
    <priority>{priority:.1}</priority>
  </url>"#,
            loc = xml_escape(&entry.loc),
            lastmod = entry.lastmod.format("%Y-%m-%d"),
            changefreq = entry.changefreq,
            priority = entry.priority,
        ));
    }

    xml.push_str("\n</urlset>");
    xml
}

/// Render a `<sitemapindex>` document.
pub fn render_sitemap_index(sitemaps: &[SitemapRef]) -> String {
    let mut xml = format!("{XML_DECLARATION}\n<sitemapindex xmlns=\"{SITEMAP_XMLNS}\">");

    for sitemap in sitemaps {
        xml.push_str(&format!(
            r#"
  <sitemap>
    <loc>{loc}</loc>
    <lastmod>{lastmod}</lastmod>
  </sitemap>"#,
            loc = xml_escape(&sitemap.loc),
            lastmod = sitemap.lastmod.format("%Y-%m-%d"),
        ));
    }

    xml.push_str("\n</sitemapindex>");
    xml
}
