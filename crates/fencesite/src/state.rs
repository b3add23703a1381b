//! Application state shared by all request handlers.
//!
//! The state holds trait objects for the contractor feed, the sitemap cache
//! and the clock so tests can swap in deterministic implementations.

use std::sync::Arc;

use anyhow::Result;

use fencesite_core::cache::Cache;
use fencesite_core::clock::{Clock, SystemClock};
use fencesite_core::dataset::ContractorFeed;

use crate::cache::MemoryCache;
use crate::config::Config;
use crate::feed::HttpFeed;

/// Shared application state.
///
/// Cloned for each request; every field is reference counted.
#[derive(Clone)]
pub struct AppState {
    /// Runtime configuration.
    pub config: Arc<Config>,
    /// Source of the contractor dataset.
    pub feed: Arc<dyn ContractorFeed>,
    /// Rendered sitemap documents keyed by selector.
    pub sitemap_cache: Arc<dyn Cache>,
    /// Time source for `<lastmod>` dates and cache ages.
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates state around an explicit feed and clock.
    ///
    /// The sitemap cache is sized and aged from `config`.
    pub fn new(config: Config, feed: Arc<dyn ContractorFeed>, clock: Arc<dyn Clock>) -> Self {
        let sitemap_cache = Arc::new(MemoryCache::new(
            config.cache_max_entries,
            config.cache_ttl(),
            clock.clone(),
        ));

        Self {
            config: Arc::new(config),
            feed,
            sitemap_cache,
            clock,
        }
    }

    /// Creates production state: an HTTP feed against `data_origin` and the
    /// system clock.
    pub fn from_config(config: Config, data_origin: &str) -> Result<Self> {
        let feed = HttpFeed::new(data_origin, config.fetch_timeout())?;

        tracing::info!(
            data_origin,
            cache_ttl_seconds = config.cache_ttl_seconds,
            cache_max_entries = config.cache_max_entries,
            dev_mode = config.dev_mode,
            "Created application state"
        );

        Ok(Self::new(config, Arc::new(feed), Arc::new(SystemClock)))
    }
}
