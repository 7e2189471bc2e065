//! API Routes
//!
//! Configures the Axum router with all profile service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_user_handler, get_user_cached_handler, get_user_handler, health_handler,
    stats_handler, update_status_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /user/:username` - Read from the backing store
/// - `GET /user/cached/:username` - Read through the cache
/// - `PUT /user/:username?status=S&evict=bool` - Update status
/// - `POST /user` - Create a user
/// - `GET /stats` - Cache statistics
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin (configurable for production)
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/user", post(create_user_handler))
        .route(
            "/user/:username",
            get(get_user_handler).put(update_status_handler),
        )
        .route("/user/cached/:username", get(get_user_cached_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
