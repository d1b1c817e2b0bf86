//! Price Cache - a caching price-lookup service
//!
//! Serves model prices from an in-memory cache, delegating misses to a
//! simulated latency-bearing backend with single-flight fetch deduplication.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod source;

pub use api::AppState;
pub use cache::PriceCache;
pub use config::Config;
pub use source::{PriceSource, SimulatedSource};
