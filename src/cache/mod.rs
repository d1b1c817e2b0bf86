//! Cache Module
//!
//! In-memory price caching: a synchronous store plus the async
//! cache-or-fetch layer with single-flight deduplication.

mod entry;
mod lookup;
mod stats;
mod store;


// Re-export public types
pub use entry::PriceEntry;
pub use lookup::PriceCache;
pub use stats::CacheStats;
pub use store::PriceStore;

// == Public Constants ==
/// Maximum allowed key length in bytes
pub const MAX_KEY_LENGTH: usize = 256;
