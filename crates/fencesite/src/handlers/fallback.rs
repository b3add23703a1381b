//! Fallback sitemap with synthetic contractor URLs (GET /sitemap-fallback.xml).

use axum::{extract::State, response::Response};

use fencesite_core::dataset::{fallback_contractor_ids, FALLBACK_SITEMAP_SIZE};
use fencesite_core::sitemap::{fallback_sitemap as render_fallback, RenderedSitemap};

use crate::{context::SiteBase, handlers::sitemap::xml_response, state::AppState};

/// GET /sitemap-fallback.xml - Static routes followed by synthetic contractors.
pub async fn fallback_sitemap(State(state): State<AppState>, SiteBase(base): SiteBase) -> Response {
    let xml = render_fallback(
        &base,
        state.clock.today(),
        fallback_contractor_ids(FALLBACK_SITEMAP_SIZE),
    );

    xml_response(RenderedSitemap { xml, stats: None })
}
