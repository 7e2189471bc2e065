//! Domain record plus request/response models for the profile API
//!
//! This module defines the stored entity and the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod record;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use record::UserRecord;
pub use requests::{CreateUserRequest, UpdateStatusQuery, MAX_USERNAME_LENGTH};
pub use responses::{ErrorResponse, HealthResponse, StatsResponse};
