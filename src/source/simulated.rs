//! Simulated Price Source
//!
//! Stands in for a real pricing backend: a fixed catalog of model prices
//! served after a configurable artificial delay.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::PriceSource;

// == Simulated Source ==
/// A `PriceSource` backed by an in-memory catalog and a fixed delay.
///
/// Stateless across calls except for logging and an invocation counter,
/// which exists so tests can assert how many times the backend was hit.
#[derive(Debug)]
pub struct SimulatedSource {
    /// Known model -> price mapping
    catalog: HashMap<String, u64>,
    /// Artificial latency applied to every fetch
    delay: Duration,
    /// Total number of fetch_price invocations
    calls: AtomicU64,
}

impl SimulatedSource {
    // == Constructor ==
    /// Creates a source with the default vehicle catalog.
    pub fn new(delay: Duration) -> Self {
        let mut catalog = HashMap::new();
        catalog.insert("accord".to_string(), 40_000);
        catalog.insert("civic".to_string(), 32_000);
        Self::with_catalog(catalog, delay)
    }

    /// Creates a source with an explicit catalog.
    pub fn with_catalog(catalog: HashMap<String, u64>, delay: Duration) -> Self {
        Self {
            catalog,
            delay,
            calls: AtomicU64::new(0),
        }
    }

    // == Call Count ==
    /// Returns how many times `fetch_price` has been invoked.
    pub fn calls(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceSource for SimulatedSource {
    async fn fetch_price(&self, key: &str) -> Option<u64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        debug!("Fetching price for '{}' from backend", key);

        // Simulated network latency
        tokio::time::sleep(self.delay).await;

        match self.catalog.get(key).copied() {
            Some(price) => {
                debug!("Backend resolved '{}' to {}", key, price);
                Some(price)
            }
            None => {
                debug!("Backend has no price for '{}'", key);
                None
            }
        }
    }
}
