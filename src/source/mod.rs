//! Price Source Module
//!
//! The external collaborator that resolves prices for uncached keys.

mod simulated;

pub use simulated::SimulatedSource;

use async_trait::async_trait;

// == Price Source Trait ==
/// An asynchronous, latency-bearing backend that resolves prices.
///
/// `fetch_price` may suspend for an arbitrary but bounded duration. A key
/// the backend does not know resolves to `None` rather than an error; the
/// backend never fails a lookup loudly.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Resolves the price for a key, suspending for the backend latency.
    ///
    /// Returns `None` when no price is available for the key.
    async fn fetch_price(&self, key: &str) -> Option<u64>;
}
