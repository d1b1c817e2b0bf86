//! Price Entry Module
//!
//! Defines the structure for individual cached prices.

use std::time::{SystemTime, UNIX_EPOCH};

// == Price Entry ==
/// A single cached price with its insertion timestamp.
///
/// Entries never expire; `cached_at` exists for enumeration and debugging
/// output only and plays no role in lookup correctness.
#[derive(Debug, Clone)]
pub struct PriceEntry {
    /// The cached price, always strictly greater than zero
    pub price: u64,
    /// Insertion timestamp (Unix milliseconds)
    pub cached_at: u64,
}

impl PriceEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub fn new(price: u64) -> Self {
        Self {
            price,
            cached_at: current_timestamp_ms(),
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}
