//! API Handlers
//!
//! HTTP request handlers forwarding each endpoint into the cache engine.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{
    GetResponse, HealthResponse, KeyQuery, SetRequest, SetResponse, StatsResponse,
};

/// Application state shared across all handlers.
///
/// The engine does its own locking, so handlers only need a shared reference.
#[derive(Clone)]
pub struct AppState {
    /// Shared cache engine holding opaque JSON values
    pub cache: Arc<Cache<Value>>,
}

impl AppState {
    /// Creates a new AppState around an existing engine.
    pub fn new(cache: Cache<Value>) -> Self {
        Self {
            cache: Arc::new(cache),
        }
    }

    /// Builds the engine from configuration. Must run inside a tokio runtime.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = Cache::new(config.default_ttl_duration(), config.max_entries)?;
        Ok(Self::new(cache))
    }
}

/// Handler for POST /set
///
/// Stores a JSON value in the cache with optional TTL.
pub async fn set_handler(
    State(state): State<AppState>,
    Json(req): Json<SetRequest>,
) -> Result<(StatusCode, Json<SetResponse>)> {
    if let Some(error_msg) = req.validate() {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let ttl = req.ttl_duration();
    state.cache.set(req.key.clone(), req.value, ttl).await;

    Ok((StatusCode::CREATED, Json(SetResponse::new(req.key))))
}

/// Handler for GET /get?key=<k>
///
/// Misses, including expired entries, map to 404.
pub async fn get_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> Result<Json<GetResponse>> {
    match state.cache.get(&query.key).await {
        Some(value) => Ok(Json(GetResponse::new(value))),
        None => Err(CacheError::NotFound(query.key)),
    }
}

/// Handler for DELETE /delete?key=<k>
///
/// Always 204, whether or not the key existed.
pub async fn delete_handler(
    State(state): State<AppState>,
    Query(query): Query<KeyQuery>,
) -> StatusCode {
    state.cache.delete(&query.key).await;
    StatusCode::NO_CONTENT
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.cache.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
