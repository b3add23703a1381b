//! Dataset diagnostics (GET /sitemap-debug).

use axum::{extract::State, Json};

use fencesite_core::dataset::{diagnose, DebugReport, PRIMARY_PATH};

use crate::{context::RequestOrigin, state::AppState};

/// GET /sitemap-debug - Reports what the primary dataset resource contains.
///
/// Only the primary path is fetched; the alternate chain is not consulted.
pub async fn sitemap_debug(
    State(state): State<AppState>,
    origin: RequestOrigin,
) -> Json<DebugReport> {
    let fetch = state.feed.fetch(PRIMARY_PATH).await;

    let report = diagnose(fetch.as_ref(), origin.as_str());
    tracing::debug!(
        origin = %origin,
        fetch_status = ?report.fetch_status,
        array_length = ?report.array_length,
        "Built sitemap debug report"
    );

    Json(report)
}
