//! Axum extractors for the request origin and the sitemap base URL.

use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap},
};

use fencesite_core::sitemap::normalize_base_url;

use super::types::{RequestOrigin, SiteBase};
use crate::state::AppState;

const FALLBACK_HOST: &str = "localhost";

fn extract_origin(headers: &HeaderMap) -> RequestOrigin {
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .filter(|h| !h.is_empty())
        .unwrap_or(FALLBACK_HOST);

    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok());

    RequestOrigin::from_parts(host, proto)
}

impl<S> FromRequestParts<S> for RequestOrigin
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(extract_origin(&parts.headers))
    }
}

impl FromRequestParts<AppState> for SiteBase {
    type Rejection = Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let base = if state.config.dev_mode {
            extract_origin(&parts.headers).0
        } else {
            state.config.base_url.clone()
        };

        Ok(SiteBase(normalize_base_url(&base).to_string()))
    }
}
