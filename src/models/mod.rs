//! Response models for the price lookup API
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing HTTP response bodies. All endpoints are reads, so there
//! are no request bodies.

pub mod responses;

// Re-export commonly used types
pub use responses::{
    CachedEntryResponse, CachedResponse, ErrorResponse, HealthResponse, PriceResponse,
    StatsResponse,
};
