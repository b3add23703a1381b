//! In-memory sitemap cache with LRU eviction.
//!
//! Provides a thread-safe in-memory cache using tokio synchronization
//! primitives and an LRU eviction policy. Every entry records when it was
//! written; an entry is fresh while its own age is below the configured TTL.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use lru::LruCache;
use tokio::sync::RwLock;

use fencesite_core::cache::{Cache, Result};
use fencesite_core::clock::Clock;

/// A single cache entry stamped with its creation time.
#[derive(Debug, Clone)]
struct CacheEntry {
    value: Vec<u8>,
    created_at: DateTime<Utc>,
}

impl CacheEntry {
    /// Returns true while the entry is younger than `ttl`.
    ///
    /// A zero TTL never yields a fresh entry.
    fn is_fresh(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now - self.created_at < ttl
    }
}

/// In-memory cache implementation with LRU eviction.
///
/// Thread-safe cache using `Arc<RwLock<LruCache>>` for concurrent access.
/// Expired entries are left in place and overwritten on the next write;
/// LRU eviction bounds memory when `max_entries` is reached.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    store: Arc<RwLock<LruCache<String, CacheEntry>>>,
    ttl: TimeDelta,
    clock: Arc<dyn Clock>,
}

impl MemoryCache {
    /// Creates a new in-memory cache with LRU eviction.
    ///
    /// # Arguments
    ///
    /// * `max_entries` - Maximum number of entries before LRU eviction kicks in.
    /// * `ttl` - Age after which an entry is no longer served.
    /// * `clock` - Time source used to stamp and age entries.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize, ttl: Duration, clock: Arc<dyn Clock>) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            store: Arc::new(RwLock::new(LruCache::new(capacity))),
            ttl: TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX),
            clock,
        }
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let now = self.clock.now();
        let mut store = self.store.write().await;

        match store.get(key) {
            Some(entry) if entry.is_fresh(now, self.ttl) => Ok(Some(entry.value.clone())),
            _ => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let entry = CacheEntry {
            value: value.to_vec(),
            created_at: self.clock.now(),
        };

        let mut store = self.store.write().await;
        store.put(key.to_string(), entry);

        Ok(())
    }
}
