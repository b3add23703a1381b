use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use fencesite_core::sitemap::{
    sitemap_error_to_status_code, SitemapError, PAGE_NOT_FOUND_MESSAGE,
};

pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Some(sitemap_error) = self.0.downcast_ref::<SitemapError>() {
            let code = sitemap_error_to_status_code(sitemap_error);
            let status_code = StatusCode::from_u16(code).unwrap_or(StatusCode::NOT_FOUND);
            tracing::debug!(error = %sitemap_error, status = code, "Sitemap page not served");
            return (status_code, PAGE_NOT_FOUND_MESSAGE).into_response();
        }

        tracing::error!(error = %self.0, "Request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
