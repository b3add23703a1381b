mod error;
mod generate;
mod http_mapping;
mod identifier;
mod pagination;
mod query;
mod render;
mod routes;
mod types;

pub use error::{Result, SitemapError};
pub use generate::{contractor_page, fallback_sitemap, sitemap_index, static_page};
pub use http_mapping::{sitemap_error_to_status_code, PAGE_NOT_FOUND_MESSAGE};
pub use identifier::{
    contractor_id, resolve_contractor_id, ContractorId, RecordFields, ID_FIELD_PRIORITY,
};
pub use pagination::{page_window, PageWindow, FIRST_CONTRACTOR_PAGE, ITEMS_PER_SITEMAP};
pub use query::{parse_page_param, SitemapQuery};
pub use render::{render_sitemap_index, render_urlset, xml_escape, SITEMAP_XMLNS};
pub use routes::{
    contractor_url_entry, normalize_base_url, sitemap_page_refs, static_url_entries,
    CONTRACTOR_PRIORITY, STATIC_ROUTES,
};
pub use types::{
    ChangeFreq, PageStats, RenderedSitemap, SitemapRef, SitemapSelector, UrlEntry, WindowStats,
};
