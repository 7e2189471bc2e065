//! API Module
//!
//! HTTP handlers and routing for the profile service REST API.
//!
//! # Endpoints
//! - `GET /user/:username` - Uncached read
//! - `GET /user/cached/:username` - Read-through cached read
//! - `PUT /user/:username?status=S&evict=bool` - Status update
//! - `POST /user` - Create a user
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
