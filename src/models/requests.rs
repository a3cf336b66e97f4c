//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use crate::cache::{MAX_KEY_LENGTH, MAX_TTL_SECS};

/// Request body for the SET operation (POST /set)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: Any JSON value, stored as-is
/// - `ttl`: Optional TTL in seconds (absent or 0 uses the default), at most
///   [`MAX_TTL_SECS`]
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: Value,
    /// Optional TTL in seconds
    #[serde(default)]
    pub ttl: Option<u64>,
}

impl SetRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.key.len() > MAX_KEY_LENGTH {
            return Some(format!(
                "Key exceeds maximum length of {} bytes",
                MAX_KEY_LENGTH
            ));
        }
        if self.ttl.is_some_and(|ttl| ttl > MAX_TTL_SECS) {
            return Some(format!(
                "TTL exceeds maximum of {} seconds",
                MAX_TTL_SECS
            ));
        }
        None
    }

    /// TTL as a Duration; zero is treated as absent.
    pub fn ttl_duration(&self) -> Option<Duration> {
        self.ttl.filter(|&s| s > 0).map(Duration::from_secs)
    }
}

/// Query string for GET /get and DELETE /delete
#[derive(Debug, Clone, Deserialize)]
pub struct KeyQuery {
    pub key: String,
}
