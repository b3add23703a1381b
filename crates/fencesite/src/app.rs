use axum::{routing::get, Router};
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use fencesite_core::dataset::PRIMARY_PATH;

use crate::{
    handlers::{
        debug::sitemap_debug, fallback::fallback_sitemap, health::livez, sitemap::sitemap,
        sitemap_index::sitemap_index,
    },
    state::AppState,
};

/// Dataset file served at the primary path and under `/static`.
const DATASET_FILE: &str = "fence-contractors.json";

/// Create the application router with all routes and middleware.
pub fn create_app(state: AppState) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/sitemap.xml", get(sitemap))
        .route("/sitemap-index.xml", get(sitemap_index))
        .route("/sitemap-fallback.xml", get(fallback_sitemap))
        .route("/sitemap-debug", get(sitemap_debug))
        .route("/livez", get(livez))
        .route_service(PRIMARY_PATH, ServeFile::new(static_dir.join(DATASET_FILE)))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{path::PathBuf, sync::Arc};

    use axum::{
        body::Body,
        http::{header, HeaderMap, Request, StatusCode},
    };
    use chrono::{DateTime, TimeDelta, Utc};
    use http_body_util::BodyExt;
    use serde_json::Value;
    use tower::ServiceExt;

    use fencesite_core::cache::{Cache, CacheError, Result as CacheResult};
    use fencesite_core::clock::ManualClock;
    use fencesite_core::dataset::ALTERNATE_PATH;

    use crate::{config::Config, feed::InMemoryFeed};

    const BASE: &str = "https://fence.example";
    const EXAMPLE_DATASET: &str = r#"[{"unique_id":"abc"},{"name":"X"},{"place_id":"p3"}]"#;

    fn test_config(cache_ttl_seconds: u64) -> Config {
        Config {
            base_url: format!("{BASE}/"),
            dev_mode: false,
            data_origin: None,
            static_dir: PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("static"),
            cache_ttl_seconds,
            cache_max_entries: 100,
            index_pages: 6,
            fetch_timeout_seconds: None,
        }
    }

    fn test_clock() -> Arc<ManualClock> {
        let start = DateTime::parse_from_rfc3339("2024-06-15T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Arc::new(ManualClock::new(start))
    }

    fn app_with(feed: &InMemoryFeed, config: Config, clock: Arc<ManualClock>) -> Router {
        create_app(AppState::new(config, Arc::new(feed.clone()), clock))
    }

    fn app(feed: &InMemoryFeed) -> Router {
        app_with(feed, test_config(0), test_clock())
    }

    async fn get_uri(app: Router, uri: &str) -> (StatusCode, HeaderMap, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = response.into_body().collect().await.unwrap().to_bytes();

        (status, headers, String::from_utf8(body.to_vec()).unwrap())
    }

    fn locs(xml: &str) -> Vec<&str> {
        xml.split("<loc>")
            .skip(1)
            .filter_map(|s| s.split("</loc>").next())
            .collect()
    }

    #[tokio::test]
    async fn test_no_query_equals_index() {
        let feed = InMemoryFeed::new();

        let (status, headers, plain) = get_uri(app(&feed), "/sitemap.xml").await;
        let (_, _, explicit) = get_uri(app(&feed), "/sitemap.xml?index=true").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/xml");
        assert_eq!(headers[header::CACHE_CONTROL], "max-age=3600");
        assert_eq!(plain, explicit);
        assert!(plain.contains("<sitemapindex"));
        assert_eq!(plain.matches("<sitemap>").count(), 6);
        assert_eq!(locs(&plain)[5], "https://fence.example/sitemap.xml?page=6");
        assert!(plain.contains("<lastmod>2024-06-15</lastmod>"));
        assert_eq!(feed.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_index_flag_wins_over_page() {
        let feed = InMemoryFeed::new();

        let (status, _, body) = get_uri(app(&feed), "/sitemap.xml?page=3&index=true").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<sitemapindex"));
    }

    #[tokio::test]
    async fn test_static_page() {
        let feed = InMemoryFeed::new();

        let (status, headers, body) = get_uri(app(&feed), "/sitemap.xml?page=1").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["x-sitemap-page"], "1");
        assert!(headers.get("x-url-count").is_none());
        assert_eq!(body.matches("<url>").count(), 7);
        assert_eq!(locs(&body)[0], "https://fence.example");
        assert!(body.contains("<changefreq>daily</changefreq>\n    <priority>1.0</priority>"));
        assert_eq!(feed.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_contractor_page() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);

        let (status, headers, body) = get_uri(app(&feed), "/sitemap.xml?page=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            locs(&body),
            vec![
                "https://fence.example/contractor/abc",
                "https://fence.example/contractor/item-2",
                "https://fence.example/contractor/p3",
            ]
        );
        assert_eq!(headers["x-sitemap-page"], "2");
        assert_eq!(headers["x-url-count"], "3");
        assert_eq!(headers["x-contractor-count"], "3");
        assert_eq!(headers["x-page-range"], "0-2");
    }

    #[tokio::test]
    async fn test_lenient_page_parse() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);

        let (status, headers, _) = get_uri(app(&feed), "/sitemap.xml?page=2abc").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["x-sitemap-page"], "2");
    }

    #[tokio::test]
    async fn test_repeated_params_use_first_value() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);

        let (status, headers, _) = get_uri(app(&feed), "/sitemap.xml?page=2&page=3").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["x-sitemap-page"], "2");

        let (status, _, body) =
            get_uri(app(&feed), "/sitemap.xml?page=1&index=true&index=false").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<sitemapindex"));

        let (status, headers, _) =
            get_uri(app(&feed), "/sitemap.xml?page=1&refresh=true&refresh=true").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["x-sitemap-page"], "1");
    }

    #[tokio::test]
    async fn test_page_out_of_range() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);

        let (status, headers, body) = get_uri(app(&feed), "/sitemap.xml?page=3").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Sitemap page not found");
        assert!(headers.get("x-sitemap-page").is_none());
    }

    #[tokio::test]
    async fn test_invalid_pages_are_not_found() {
        let feed = InMemoryFeed::new();

        for uri in ["/sitemap.xml?page=abc", "/sitemap.xml?page=0"] {
            let (status, _, body) = get_uri(app(&feed), uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
            assert_eq!(body, "Sitemap page not found");
        }
        assert_eq!(feed.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_alternate_path_dataset() {
        let feed = InMemoryFeed::new()
            .with_status(PRIMARY_PATH, 503, "Service Unavailable", "")
            .with_body(ALTERNATE_PATH, r#"[{"business_id":"b-1"}]"#);

        let (status, _, body) = get_uri(app(&feed), "/sitemap.xml?page=2").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(locs(&body), vec!["https://fence.example/contractor/b-1"]);
    }

    #[tokio::test]
    async fn test_synthetic_dataset_pages() {
        let feed = InMemoryFeed::new().with_error(PRIMARY_PATH, "connection refused");

        let (status, headers, body) = get_uri(app(&feed), "/sitemap.xml?page=5").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["x-contractor-count"], "4000");
        assert_eq!(headers["x-page-range"], "3000-3999");
        assert_eq!(body.matches("<url>").count(), 1000);
        assert_eq!(
            locs(&body)[0],
            "https://fence.example/contractor/dummy-3001"
        );

        let (status, _, _) = get_uri(app(&feed), "/sitemap.xml?page=6").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_primary_json_is_empty_dataset() {
        let feed = InMemoryFeed::new()
            .with_body(PRIMARY_PATH, "<!doctype html>")
            .with_body(ALTERNATE_PATH, EXAMPLE_DATASET);

        let (status, _, body) = get_uri(app(&feed), "/sitemap.xml?page=2").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Sitemap page not found");
        assert_eq!(feed.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_same_page_renders_identically() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);

        let (_, _, first) = get_uri(app(&feed), "/sitemap.xml?page=2").await;
        let (_, _, second) = get_uri(app(&feed), "/sitemap.xml?page=2&refresh=true").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_cache_hit_within_ttl() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);
        let app = app_with(&feed, test_config(600), test_clock());

        let (_, _, first) = get_uri(app.clone(), "/sitemap.xml?page=2").await;
        feed.set_body(PRIMARY_PATH, r#"[{"unique_id":"changed"}]"#);
        let (_, headers, second) = get_uri(app, "/sitemap.xml?page=2").await;

        assert_eq!(first, second);
        assert_eq!(headers["x-url-count"], "3");
        assert_eq!(feed.fetch_count(), 1);
    }

    #[tokio::test]
    async fn test_refresh_bypasses_cache() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);
        let app = app_with(&feed, test_config(600), test_clock());

        get_uri(app.clone(), "/sitemap.xml?page=2").await;
        feed.set_body(PRIMARY_PATH, r#"[{"unique_id":"changed"}]"#);

        let (_, _, refreshed) = get_uri(app.clone(), "/sitemap.xml?page=2&refresh=true").await;
        assert_eq!(
            locs(&refreshed),
            vec!["https://fence.example/contractor/changed"]
        );

        // The refreshed document replaced the cached one
        let (_, _, cached) = get_uri(app, "/sitemap.xml?page=2").await;
        assert_eq!(cached, refreshed);
        assert_eq!(feed.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_cache_entry_expires() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);
        let clock = test_clock();
        let app = app_with(&feed, test_config(600), clock.clone());

        get_uri(app.clone(), "/sitemap.xml?page=2").await;
        clock.advance(TimeDelta::seconds(600));
        get_uri(app, "/sitemap.xml?page=2").await;

        assert_eq!(feed.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_zero_ttl_never_caches() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);
        let app = app(&feed);

        get_uri(app.clone(), "/sitemap.xml?page=2").await;
        get_uri(app, "/sitemap.xml?page=2").await;

        assert_eq!(feed.fetch_count(), 2);
    }

    /// Cache whose backend is always down.
    struct UnavailableCache;

    #[async_trait::async_trait]
    impl Cache for UnavailableCache {
        async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
            Err(CacheError::Unavailable("backend down".to_string()))
        }

        async fn set(&self, _key: &str, _value: &[u8]) -> CacheResult<()> {
            Err(CacheError::Unavailable("backend down".to_string()))
        }
    }

    #[tokio::test]
    async fn test_cache_errors_do_not_fail_requests() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);
        let mut state = AppState::new(test_config(600), Arc::new(feed.clone()), test_clock());
        state.sitemap_cache = Arc::new(UnavailableCache);
        let app = create_app(state);

        let (status, headers, _) = get_uri(app.clone(), "/sitemap.xml?page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers["x-url-count"], "3");

        get_uri(app, "/sitemap.xml?page=2").await;
        assert_eq!(feed.fetch_count(), 2);
    }

    #[tokio::test]
    async fn test_dev_mode_uses_request_origin() {
        let feed = InMemoryFeed::new();
        let mut config = test_config(0);
        config.dev_mode = true;
        let app = app_with(&feed, config, test_clock());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/sitemap.xml?page=1")
                    .header(header::HOST, "preview.fence.local:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let xml = String::from_utf8(body.to_vec()).unwrap();

        assert_eq!(locs(&xml)[1], "http://preview.fence.local:3000/about");
    }

    #[tokio::test]
    async fn test_sitemap_index_endpoint() {
        let feed = InMemoryFeed::new();

        let (status, headers, body) = get_uri(app(&feed), "/sitemap-index.xml").await;
        let (_, _, unified) = get_uri(app(&feed), "/sitemap.xml").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(headers[header::CONTENT_TYPE], "application/xml");
        assert_eq!(body, unified);
    }

    #[tokio::test]
    async fn test_fallback_sitemap() {
        let feed = InMemoryFeed::new();

        let (status, _, body) = get_uri(app(&feed), "/sitemap-fallback.xml").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body.matches("<url>").count(), 507);
        let locs = locs(&body);
        assert_eq!(locs[7], "https://fence.example/contractor/unique_id_1");
        assert_eq!(locs[506], "https://fence.example/contractor/unique_id_500");
        assert_eq!(feed.fetch_count(), 0);
    }

    #[tokio::test]
    async fn test_sitemap_debug() {
        let feed = InMemoryFeed::new().with_body(PRIMARY_PATH, EXAMPLE_DATASET);

        let (status, _, body) = get_uri(app(&feed), "/sitemap-debug").await;
        let report: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["fetchStatus"], 200);
        assert_eq!(report["isValidJson"], true);
        assert_eq!(report["arrayLength"], 3);
        assert_eq!(report["recommendedRoutePattern"], "/contractor/[unique_id]");
        assert_eq!(
            report["sampleRoute"],
            "http://localhost/contractor/unique_id"
        );
    }

    #[tokio::test]
    async fn test_sitemap_debug_reports_fetch_error() {
        let feed = InMemoryFeed::new().with_error(PRIMARY_PATH, "connection refused");

        let (status, _, body) = get_uri(app(&feed), "/sitemap-debug").await;
        let report: Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(report["fetchError"], "Request failed: connection refused");
        assert!(report.get("fetchStatus").is_none());
    }

    #[tokio::test]
    async fn test_serves_dataset_file() {
        let feed = InMemoryFeed::new();

        let (status, _, body) = get_uri(app(&feed), "/fence-contractors.json").await;
        assert_eq!(status, StatusCode::OK);
        let records: Vec<Value> = serde_json::from_str(&body).unwrap();
        assert_eq!(records[0]["unique_id"], "cedar-line-fence-co-austin-tx");

        let (status, _, alternate) = get_uri(app(&feed), "/static/fence-contractors.json").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(alternate, body);
    }

    #[tokio::test]
    async fn test_livez() {
        let feed = InMemoryFeed::new();

        let (status, _, _) = get_uri(app(&feed), "/livez").await;

        assert_eq!(status, StatusCode::OK);
    }
}
