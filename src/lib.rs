//! Profile Cache - A read-through cache for user profiles
//!
//! Serves repeated profile reads from a TTL-bound entry table and evicts
//! on write when the caller asks for it.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use service::UserService;
pub use tasks::spawn_cleanup_task;
