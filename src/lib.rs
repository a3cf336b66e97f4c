//! TTL Cache - an in-process key/value cache
//!
//! Entries carry an absolute expiration instant, the store is bounded by a
//! maximum entry count, and a background reaper reclaims expired entries.
//! An axum adapter exposes the engine over HTTP.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::{Cache, CacheStats};
pub use config::Config;
pub use error::CacheError;
