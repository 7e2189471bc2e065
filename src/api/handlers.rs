//! API Handlers
//!
//! HTTP request handlers mapping each endpoint onto a `UserService` operation.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::error::{Result, ServiceError};
use crate::models::{
    CreateUserRequest, HealthResponse, StatsResponse, UpdateStatusQuery, UserRecord,
};
use crate::service::UserService;
use crate::store::MemoryStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-aside user service
    pub users: UserService,
}

impl AppState {
    /// Creates a new AppState around the given service.
    pub fn new(users: UserService) -> Self {
        Self { users }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Backs the service with an in-memory store using the configured
    /// cache TTL and read latency.
    pub fn from_config(config: &crate::config::Config) -> Self {
        let store = Arc::new(MemoryStore::new());
        let users =
            UserService::new(store, config.ttl()).with_read_latency(config.read_latency());
        Self::new(users)
    }
}

/// Handler for GET /user/:username
///
/// Reads the user straight from the backing store.
pub async fn get_user_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserRecord>> {
    let record = state.users.read_uncached(&username).await?;
    Ok(Json(record))
}

/// Handler for GET /user/cached/:username
///
/// Reads the user through the cache.
pub async fn get_user_cached_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<UserRecord>> {
    let record = state.users.read_cached(&username).await?;
    Ok(Json(record))
}

/// Handler for PUT /user/:username?status=S&evict=bool
pub async fn update_status_handler(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(query): Query<UpdateStatusQuery>,
) -> Result<Json<UserRecord>> {
    let record = state
        .users
        .update_status(&username, query.status, query.evict)
        .await?;
    Ok(Json(record))
}

/// Handler for POST /user
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<UserRecord>> {
    if let Some(error_msg) = req.validate() {
        return Err(ServiceError::InvalidRequest(error_msg));
    }

    let record = state.users.create(req.into_record()).await?;
    Ok(Json(record))
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.users.cache_stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
