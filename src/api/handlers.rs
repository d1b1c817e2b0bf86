//! API Handlers
//!
//! HTTP request handlers for each price lookup endpoint.

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::cache::PriceCache;
use crate::error::Result;
use crate::models::{CachedResponse, HealthResponse, PriceResponse, StatsResponse};
use crate::source::SimulatedSource;

/// Application state shared across all handlers.
///
/// The cache is constructed once at startup and shared via `Arc`; there is
/// no hidden module-level instance.
#[derive(Clone)]
pub struct AppState {
    /// Shared price cache
    pub cache: Arc<PriceCache>,
}

impl AppState {
    /// Creates a new AppState wrapping the given cache.
    pub fn new(cache: PriceCache) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Wires the cache to a simulated backend with the configured latency.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let source = Arc::new(SimulatedSource::new(Duration::from_millis(
            config.fetch_delay_ms,
        )));
        Self::new(PriceCache::new(source))
    }
}

/// Handler for GET /price/:model
///
/// Serves the price from the cache, fetching from the backend on a miss.
/// An unknown model yields 404; a zero-priced backend answer is treated
/// the same way and is never cached.
pub async fn price_handler(
    State(state): State<AppState>,
    Path(model): Path<String>,
) -> Result<Json<PriceResponse>> {
    let price = state.cache.get_price(&model).await?;

    Ok(Json(PriceResponse::new(model, price)))
}

/// Handler for GET /cached
///
/// Lists all currently cached entries. Order is unspecified.
pub async fn cached_handler(State(state): State<AppState>) -> Json<CachedResponse> {
    let snapshot = state.cache.entries().await;

    Json(CachedResponse::new(snapshot))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.stats().await;

    Json(StatsResponse::new(&stats))
}

/// Handler for GET /health
///
/// Returns health status of the server.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
