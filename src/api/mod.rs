//! API Module
//!
//! HTTP handlers and routing for the price lookup REST API.
//!
//! # Endpoints
//! - `GET /price/:model` - Look up a price (served from cache or fetched)
//! - `GET /cached` - List currently cached entries
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
