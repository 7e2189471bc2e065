//! Request DTOs for the profile API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;

use super::UserRecord;

/// Maximum allowed username length in bytes
pub const MAX_USERNAME_LENGTH: usize = 256;

/// Request body for creating a user (POST /user)
///
/// Unknown fields such as `id` or `createDate` are ignored; the store
/// assigns both.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserRequest {
    /// Unique username
    pub username: String,
    /// Initial status, empty when omitted
    #[serde(default)]
    pub status: String,
}

impl CreateUserRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.username.is_empty() {
            return Some("Username cannot be empty".to_string());
        }
        if self.username.len() > MAX_USERNAME_LENGTH {
            return Some(format!(
                "Username exceeds maximum length of {} bytes",
                MAX_USERNAME_LENGTH
            ));
        }
        None
    }

    /// Converts the request into an unsaved record.
    pub fn into_record(self) -> UserRecord {
        UserRecord::new(self.username, self.status)
    }
}

/// Query string for a status update (PUT /user/:username?status=S&evict=bool)
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusQuery {
    /// New status value
    pub status: String,
    /// Whether to drop the cached entry once the save succeeds
    pub evict: bool,
}
