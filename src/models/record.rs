//! User Record
//!
//! The profile entity owned by the backing store and projected into the cache.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Wire format of `createDate`, `MM/dd/yyyy`.
pub const CREATE_DATE_FORMAT: &str = "%m/%d/%Y";

// == User Record ==
/// A user profile keyed by username.
///
/// `username` never changes after creation and `created_at` is written once,
/// by the store, on the first save.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserRecord {
    /// Surrogate id assigned by the store, `None` until first saved
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Unique key
    pub username: String,
    /// The only field updated by writes
    pub status: String,
    /// Creation timestamp
    #[serde(rename = "createDate", serialize_with = "serialize_create_date")]
    pub created_at: DateTime<Utc>,
}

impl UserRecord {
    /// Creates an unsaved record stamped with the current time.
    pub fn new(username: impl Into<String>, status: impl Into<String>) -> Self {
        Self {
            id: None,
            username: username.into(),
            status: status.into(),
            created_at: Utc::now(),
        }
    }
}

fn serialize_create_date<S>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&date.format(CREATE_DATE_FORMAT))
}
