//! Price Cache Module
//!
//! Cache-or-fetch orchestration on top of [`PriceStore`], with single-flight
//! deduplication of concurrent fetches for the same key.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};
use tracing::{debug, info};

use crate::cache::{CacheStats, PriceEntry, PriceStore};
use crate::error::{PriceError, Result};
use crate::source::PriceSource;

// == Price Cache ==
/// Serves price lookups from an in-memory store, delegating misses to a
/// [`PriceSource`].
///
/// Per-key lifecycle: uncached -> fetch pending -> cached on a successful
/// (> 0) fetch; an absent or zero price leaves the key uncached so the next
/// lookup fetches again. There is no terminal failure state and no expiry.
///
/// Constructed explicitly and shared via `Arc`; there is no process-global
/// instance.
pub struct PriceCache {
    /// Thread-safe price store
    store: Arc<RwLock<PriceStore>>,
    /// Backend consulted on cache misses
    source: Arc<dyn PriceSource>,
    /// One lock per key with a fetch in flight, so concurrent cold lookups
    /// for the same key share a single backend call
    pending: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl PriceCache {
    // == Constructor ==
    /// Creates an empty cache backed by the given source.
    pub fn new(source: Arc<dyn PriceSource>) -> Self {
        Self {
            store: Arc::new(RwLock::new(PriceStore::new())),
            source,
            pending: Mutex::new(HashMap::new()),
        }
    }

    // == Get Price ==
    /// Returns the price for a key, fetching from the backend on a miss.
    ///
    /// # Behavior
    /// 1. Cache hit: returns the stored price immediately, no suspension.
    /// 2. Cache miss: suspends on the backend fetch. Concurrent misses for
    ///    the same key wait on the in-flight fetch instead of issuing their
    ///    own.
    /// 3. A fetched price > 0 is inserted before returning.
    /// 4. An absent or zero price yields `PriceError::NotFound` and the map
    ///    is left untouched, so a later call re-fetches.
    ///
    /// Lookups for unrelated keys never wait on each other's fetches.
    pub async fn get_price(&self, key: &str) -> Result<u64> {
        if key.len() > crate::cache::MAX_KEY_LENGTH {
            return Err(PriceError::InvalidKey(format!(
                "Key exceeds maximum length of {} bytes",
                crate::cache::MAX_KEY_LENGTH
            )));
        }

        // Fast path: serve from the store
        if let Some(price) = self.store.write().await.lookup(key) {
            debug!("Cache hit for '{}': {}", key, price);
            return Ok(price);
        }

        // Slow path: at most one concurrent fetch per key
        let lock = self.pending_lock(key).await;
        let _guard = lock.lock().await;

        // Double-check after acquiring the lock; another caller may have
        // completed the fetch while we waited
        if let Some(price) = self.store.read().await.peek(key) {
            debug!("Fetch for '{}' completed by concurrent caller: {}", key, price);
            return Ok(price);
        }

        self.store.write().await.record_fetch();
        let fetched = self.source.fetch_price(key).await;

        let result = match fetched {
            Some(price) if price > 0 => {
                let inserted = self.store.write().await.insert(key.to_string(), price);
                if inserted.is_ok() {
                    info!("Cached '{}' at {}", key, price);
                }
                inserted.map(|_| price)
            }
            other => {
                // Zero or absent: not cached, next lookup retries the backend
                debug!("No usable price for '{}' (backend returned {:?})", key, other);
                Err(PriceError::NotFound(key.to_string()))
            }
        };

        // The pending entry may only disappear after the insert has landed,
        // otherwise a caller missing the fast path in that window would mint
        // a fresh lock and issue a second fetch for the same key
        self.remove_pending_lock(key).await;

        result
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub async fn stats(&self) -> CacheStats {
        self.store.read().await.stats()
    }

    // == Entries ==
    /// Returns a snapshot of cached entries for enumeration/debugging.
    pub async fn entries(&self) -> Vec<(String, PriceEntry)> {
        self.store.read().await.entries()
    }

    // == Contains ==
    /// Returns true if the key is currently cached.
    pub async fn contains(&self, key: &str) -> bool {
        self.store.read().await.contains(key)
    }

    // == Length ==
    /// Returns the current number of cached entries.
    pub async fn len(&self) -> usize {
        self.store.read().await.len()
    }

    // == Pending Lock Helpers ==
    /// Returns the in-flight lock for a key, creating it if absent.
    async fn pending_lock(&self, key: &str) -> Arc<Mutex<()>> {
        let mut pending = self.pending.lock().await;
        pending
            .entry(key.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Drops the in-flight lock for a key once its fetch has settled.
    async fn remove_pending_lock(&self, key: &str) {
        let mut pending = self.pending.lock().await;
        pending.remove(key);
    }
}
