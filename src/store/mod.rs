//! Backing Store Module
//!
//! The authoritative key-to-record storage the cache sits in front of.
//! The cache never depends on anything beyond `lookup` and `save`.

mod memory;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::UserRecord;

pub use memory::MemoryStore;

/// Transport-level failure talking to the backing store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Unavailable(String),
}

/// Durable username → record storage.
///
/// Implementations have no caching awareness. Uniqueness on create is
/// enforced by the caller, not here.
#[async_trait]
pub trait BackingStore: Send + Sync {
    /// Fetch the record for `username`, `None` if absent
    async fn lookup(&self, username: &str) -> Result<Option<UserRecord>, StoreError>;

    /// Insert or replace the record keyed by its username
    async fn save(&self, record: UserRecord) -> Result<UserRecord, StoreError>;
}
