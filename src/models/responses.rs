//! Response DTOs for the price lookup API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::{CacheStats, PriceEntry};

/// Response body for a price lookup (GET /price/:model)
#[derive(Debug, Clone, Serialize)]
pub struct PriceResponse {
    /// The requested model
    pub model: String,
    /// The resolved price
    pub price: u64,
}

impl PriceResponse {
    /// Creates a new PriceResponse
    pub fn new(model: impl Into<String>, price: u64) -> Self {
        Self {
            model: model.into(),
            price,
        }
    }
}

/// A single cached entry as exposed by the enumeration endpoint
#[derive(Debug, Clone, Serialize)]
pub struct CachedEntryResponse {
    /// The cached model
    pub model: String,
    /// The cached price
    pub price: u64,
    /// When the entry was cached (Unix milliseconds)
    pub cached_at: u64,
}

/// Response body for the enumeration endpoint (GET /cached)
#[derive(Debug, Clone, Serialize)]
pub struct CachedResponse {
    /// Number of cached entries
    pub count: usize,
    /// The cached entries
    pub entries: Vec<CachedEntryResponse>,
}

impl CachedResponse {
    /// Creates a new CachedResponse from a store snapshot
    pub fn new(snapshot: Vec<(String, PriceEntry)>) -> Self {
        let entries: Vec<CachedEntryResponse> = snapshot
            .into_iter()
            .map(|(model, entry)| CachedEntryResponse {
                model,
                price: entry.price,
                cached_at: entry.cached_at,
            })
            .collect();

        Self {
            count: entries.len(),
            entries,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of lookups served from the cache
    pub hits: u64,
    /// Number of lookups that missed the cache
    pub misses: u64,
    /// Number of backend fetches issued
    pub fetches: u64,
    /// Current number of cached entries
    pub total_entries: usize,
    /// Cache hit rate (0.0 to 1.0)
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(stats: &CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            fetches: stats.fetches,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status, always "healthy" when the server responds
    pub status: String,
    /// Current server time (RFC 3339)
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a healthy response stamped with the current time
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Generic error response body, produced by the `PriceError` response mapping
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
