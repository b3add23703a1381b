//! Standalone sitemap index (GET /sitemap-index.xml).

use axum::{extract::State, response::Response};

use fencesite_core::sitemap::sitemap_index as render_index;

use crate::{context::SiteBase, handlers::sitemap::xml_response, state::AppState};

/// GET /sitemap-index.xml - Index of the configured number of sitemap pages.
///
/// Rendered on every request, never cached.
pub async fn sitemap_index(State(state): State<AppState>, SiteBase(base): SiteBase) -> Response {
    let pages = state.config.index_pages;
    tracing::debug!(pages, base = %base, "Rendering sitemap index");

    xml_response(render_index(&base, state.clock.today(), pages))
}
