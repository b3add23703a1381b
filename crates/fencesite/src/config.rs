use std::{
    env,
    net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Public origin used in sitemap URLs outside dev mode (default: "http://localhost:3000")
    pub base_url: String,
    /// Use the request's own origin instead of `base_url` (default: false).
    /// Set whenever `DEV_MODE` is present, whatever its value.
    pub dev_mode: bool,
    /// Origin the contractor dataset is fetched from (default: the server itself)
    pub data_origin: Option<String>,
    /// Directory served for the dataset files (default: "static")
    pub static_dir: PathBuf,
    /// Sitemap cache TTL in seconds; 0 disables cache hits (default: 0)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cached sitemap documents (default: 1,000)
    pub cache_max_entries: usize,
    /// Number of pages listed by the sitemap index (default: 6)
    pub index_pages: u32,
    /// Timeout for dataset fetches in seconds (default: none)
    pub fetch_timeout_seconds: Option<u64>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `BASE_URL` - Public origin (default: "http://localhost:3000")
    /// - `DEV_MODE` - When set, sitemap URLs use the request origin. Only
    ///   presence is checked, so `DEV_MODE=false` also enables it.
    /// - `DATA_ORIGIN` - Origin serving `/fence-contractors.json` (default: this server)
    /// - `STATIC_DIR` - Directory served under `/static` (default: "static")
    /// - `SITEMAP_CACHE_TTL_SECONDS` - Sitemap cache TTL (default: 0)
    /// - `SITEMAP_CACHE_MAX_ENTRIES` - Maximum cached documents (default: 1,000)
    /// - `SITEMAP_INDEX_PAGES` - Pages listed by the index (default: 6)
    /// - `FETCH_TIMEOUT_SECONDS` - Dataset fetch timeout (default: none)
    pub fn from_env() -> Self {
        Self {
            base_url: env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string()),
            dev_mode: env::var("DEV_MODE").is_ok(),
            data_origin: env::var("DATA_ORIGIN").ok().filter(|v| !v.is_empty()),
            static_dir: env::var("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("static")),
            cache_ttl_seconds: env::var("SITEMAP_CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            cache_max_entries: env::var("SITEMAP_CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(1_000),
            index_pages: env::var("SITEMAP_INDEX_PAGES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(6),
            fetch_timeout_seconds: env::var("FETCH_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok()),
        }
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Get the dataset fetch timeout as a Duration, if one is configured.
    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.fetch_timeout_seconds.map(Duration::from_secs)
    }

    /// Origin to fetch the dataset from, falling back to the address this
    /// server is bound to.
    ///
    /// A wildcard bind address (`0.0.0.0`, `::`) is reached through loopback
    /// of the same family.
    pub fn data_origin_or_local(&self, local_addr: SocketAddr) -> String {
        if let Some(origin) = &self.data_origin {
            return origin.clone();
        }

        let mut addr = local_addr;
        if addr.ip().is_unspecified() {
            addr.set_ip(match addr.ip() {
                IpAddr::V4(_) => IpAddr::V4(Ipv4Addr::LOCALHOST),
                IpAddr::V6(_) => IpAddr::V6(Ipv6Addr::LOCALHOST),
            });
        }
        format!("http://{addr}")
    }
}
