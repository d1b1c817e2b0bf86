//! Price Store Module
//!
//! Synchronous core of the cache: the key -> price mapping plus statistics.
//! The async cache-or-fetch orchestration lives in [`super::PriceCache`].

use std::collections::HashMap;

use crate::cache::{CacheStats, PriceEntry, MAX_KEY_LENGTH};
use crate::error::{PriceError, Result};

// == Price Store ==
/// In-memory price mapping.
///
/// Invariant: a key present in the map always holds the last price
/// successfully fetched for it, and every stored price is strictly greater
/// than zero. Entries never expire and are never evicted.
#[derive(Debug, Default)]
pub struct PriceStore {
    /// Key -> price storage
    entries: HashMap<String, PriceEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl PriceStore {
    // == Constructor ==
    /// Creates a new, empty PriceStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Lookup ==
    /// Returns the cached price for a key, recording a hit or miss.
    ///
    /// A `None` here means the caller must go to the backend; it is not an
    /// error at this layer.
    pub fn lookup(&mut self, key: &str) -> Option<u64> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.price)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Peek ==
    /// Returns the cached price without touching statistics.
    ///
    /// Used for the double-check inside the single-flight path, where the
    /// original lookup already recorded the miss.
    pub fn peek(&self, key: &str) -> Option<u64> {
        self.entries.get(key).map(|entry| entry.price)
    }

    // == Insert ==
    /// Stores a fetched price under a key.
    ///
    /// Only strictly positive prices are accepted; a zero price means "no
    /// price available" at the backend and caching it would turn a transient
    /// miss into a permanent wrong answer. Overwrites are allowed, so the
    /// last writer wins for a key.
    ///
    /// # Arguments
    /// * `key` - The key to store the price under
    /// * `price` - The fetched price, must be > 0
    pub fn insert(&mut self, key: String, price: u64) -> Result<()> {
        if key.len() > MAX_KEY_LENGTH {
            return Err(PriceError::InvalidKey(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            )));
        }

        if price == 0 {
            return Err(PriceError::InvalidKey(format!(
                "Refusing to cache non-positive price for '{}'",
                key
            )));
        }

        self.entries.insert(key, PriceEntry::new(price));
        self.stats.set_total_entries(self.entries.len());

        Ok(())
    }

    // == Record Fetch ==
    /// Records that a backend fetch was issued.
    pub fn record_fetch(&mut self) {
        self.stats.record_fetch();
    }

    // == Contains ==
    /// Returns true if the key is currently cached.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Entries ==
    /// Returns a snapshot of all cached entries for enumeration/debugging.
    pub fn entries(&self) -> Vec<(String, PriceEntry)> {
        self.entries
            .iter()
            .map(|(key, entry)| (key.clone(), entry.clone()))
            .collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
