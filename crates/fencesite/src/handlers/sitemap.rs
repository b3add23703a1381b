//! Unified sitemap generator (GET /sitemap.xml).

use axum::{
    extract::{Query, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
};

use fencesite_core::cache::{deserialize_sitemap, serialize_sitemap, sitemap_key};
use fencesite_core::sitemap::{
    contractor_page, sitemap_index, static_page, RenderedSitemap, SitemapQuery, SitemapSelector,
};

use crate::{context::SiteBase, feed::load_contractors, handlers::AppError, state::AppState};

const XML_CONTENT_TYPE: &str = "application/xml";
const XML_CACHE_CONTROL: &str = "max-age=3600";

const X_SITEMAP_PAGE: &str = "x-sitemap-page";
const X_URL_COUNT: &str = "x-url-count";
const X_CONTRACTOR_COUNT: &str = "x-contractor-count";
const X_PAGE_RANGE: &str = "x-page-range";

/// GET /sitemap.xml - Sitemap index, static routes page or contractor page.
///
/// Rendered documents are cached per selector unless `refresh=true`.
/// Repeated query keys resolve to their first value.
pub async fn sitemap(
    State(state): State<AppState>,
    SiteBase(base): SiteBase,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let query = SitemapQuery::from_pairs(params);
    let selector = query.selector()?;
    let key = sitemap_key(&selector);
    let refresh = query.force_refresh();

    tracing::debug!(%selector, refresh, base = %base, "Sitemap requested");

    if !refresh {
        if let Some(cached) = cached_sitemap(&state, &key).await {
            tracing::debug!(key = %key, "Sitemap cache hit");
            return Ok(xml_response(cached));
        }
    }

    let rendered = render(&state, &selector, &base).await?;
    store_sitemap(&state, &key, &rendered).await;

    Ok(xml_response(rendered))
}

async fn render(
    state: &AppState,
    selector: &SitemapSelector,
    base: &str,
) -> Result<RenderedSitemap, AppError> {
    let today = state.clock.today();

    let rendered = match *selector {
        SitemapSelector::Index => sitemap_index(base, today, state.config.index_pages),
        SitemapSelector::Static => static_page(base, today),
        SitemapSelector::Contractors(page) => {
            let outcome = load_contractors(state.feed.as_ref()).await;
            tracing::debug!(
                page,
                outcome = outcome.kind(),
                count = outcome.records().len(),
                failure = outcome.failure().map(tracing::field::display),
                "Contractor dataset ready"
            );
            contractor_page(outcome.records(), page, base, today)?
        }
    };

    Ok(rendered)
}

async fn cached_sitemap(state: &AppState, key: &str) -> Option<RenderedSitemap> {
    let bytes = match state.sitemap_cache.get(key).await {
        Ok(bytes) => bytes?,
        Err(e) => {
            tracing::warn!(key, error = %e, "Sitemap cache read failed");
            return None;
        }
    };

    match deserialize_sitemap(&bytes) {
        Ok(sitemap) => Some(sitemap),
        Err(e) => {
            tracing::warn!(key, error = %e, "Discarding unreadable cached sitemap");
            None
        }
    }
}

async fn store_sitemap(state: &AppState, key: &str, sitemap: &RenderedSitemap) {
    let bytes = match serialize_sitemap(sitemap) {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(key, error = %e, "Failed to serialize sitemap for cache");
            return;
        }
    };

    if let Err(e) = state.sitemap_cache.set(key, &bytes).await {
        tracing::warn!(key, error = %e, "Sitemap cache write failed");
    }
}

/// Builds an XML response carrying the page statistics as headers.
pub(crate) fn xml_response(sitemap: RenderedSitemap) -> Response {
    let mut response = (
        [
            (header::CONTENT_TYPE, XML_CONTENT_TYPE),
            (header::CACHE_CONTROL, XML_CACHE_CONTROL),
        ],
        sitemap.xml,
    )
        .into_response();

    let Some(stats) = sitemap.stats else {
        return response;
    };

    let headers = response.headers_mut();
    headers.insert(X_SITEMAP_PAGE, HeaderValue::from(stats.page));

    if let Some(window) = stats.window {
        headers.insert(X_URL_COUNT, HeaderValue::from(window.url_count));
        headers.insert(
            X_CONTRACTOR_COUNT,
            HeaderValue::from(window.contractor_count),
        );
        if let Ok(range) = HeaderValue::from_str(&window.range_label()) {
            headers.insert(X_PAGE_RANGE, range);
        }
    }

    response
}
