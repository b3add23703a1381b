//! Builders for every sitemap document the site serves.
//!
//! Each builder is a pure function of its inputs, so the same page of the
//! same dataset renders byte-identical XML for a given date.

use chrono::NaiveDate;

use super::{
    contractor_id, contractor_url_entry, page_window, render_sitemap_index, render_urlset,
    sitemap_page_refs, static_url_entries, PageStats, RecordFields, RenderedSitemap, Result,
    WindowStats,
};

/// Sitemap index referencing `pages` sitemap pages.
pub fn sitemap_index(base_url: &str, today: NaiveDate, pages: u32) -> RenderedSitemap {
    RenderedSitemap {
        xml: render_sitemap_index(&sitemap_page_refs(base_url, today, pages)),
        stats: None,
    }
}

/// Page 1: the static routes.
pub fn static_page(base_url: &str, today: NaiveDate) -> RenderedSitemap {
    RenderedSitemap {
        xml: render_urlset(&static_url_entries(base_url, today)),
        stats: Some(PageStats {
            page: 1,
            window: None,
        }),
    }
}

/// A page of contractor detail URLs cut from `records`.
///
/// Identifiers are resolved against each record's position in the whole
/// dataset, not in the page.
pub fn contractor_page<R: RecordFields>(
    records: &[R],
    page: u32,
    base_url: &str,
    today: NaiveDate,
) -> Result<RenderedSitemap> {
    let window = page_window(page, records.len())?;

    let entries: Vec<_> = records[window.range()]
        .iter()
        .zip(window.range())
        .map(|(record, index)| contractor_url_entry(base_url, &contractor_id(record, index), today))
        .collect();

    Ok(RenderedSitemap {
        xml: render_urlset(&entries),
        stats: Some(PageStats {
            page,
            window: Some(WindowStats {
                url_count: entries.len(),
                contractor_count: records.len(),
                start: window.start,
                end: window.end,
            }),
        }),
    })
}

/// Static routes followed by URLs for synthetic contractor ids.
pub fn fallback_sitemap<I>(base_url: &str, today: NaiveDate, contractor_ids: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut entries = static_url_entries(base_url, today);
    entries.extend(
        contractor_ids
            .into_iter()
            .map(|id| contractor_url_entry(base_url, id.as_ref(), today)),
    );
    render_urlset(&entries)
}
