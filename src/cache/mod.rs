//! Cache Module
//!
//! In-memory key/value caching with per-entry TTL, bounded capacity and
//! arbitrary-victim eviction.

use std::time::Duration;

mod engine;
mod entry;
mod evict;
mod stats;
mod store;


// Re-export public types
pub use engine::Cache;
pub use entry::CacheEntry;
pub use evict::select_victim;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Maximum allowed key length in bytes accepted by the HTTP adapter
pub const MAX_KEY_LENGTH: usize = 256;

/// Longest accepted TTL in seconds (ten years)
pub const MAX_TTL_SECS: u64 = 10 * 365 * 24 * 60 * 60;

/// Longest accepted TTL; longer per-write TTLs are clamped to it
pub const MAX_TTL: Duration = Duration::from_secs(MAX_TTL_SECS);
