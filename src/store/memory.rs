//! In-Memory Backing Store
//!
//! HashMap-backed store with call counters.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::trace;

use super::{BackingStore, StoreError};
use crate::models::UserRecord;

// == Memory Store ==
/// Backing store kept in process memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: RwLock<HashMap<String, UserRecord>>,
    next_id: AtomicU64,
    lookups: AtomicU64,
    saves: AtomicU64,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `lookup` calls served so far.
    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Number of `save` calls served so far.
    pub fn save_count(&self) -> u64 {
        self.saves.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl BackingStore for MemoryStore {
    async fn lookup(&self, username: &str) -> Result<Option<UserRecord>, StoreError> {
        self.lookups.fetch_add(1, Ordering::Relaxed);

        let record = self.records.read().await.get(username).cloned();
        trace!(username, found = record.is_some(), "store lookup");
        Ok(record)
    }

    async fn save(&self, mut record: UserRecord) -> Result<UserRecord, StoreError> {
        self.saves.fetch_add(1, Ordering::Relaxed);

        let mut records = self.records.write().await;
        match records.get(&record.username) {
            // Identity and creation time are write-once
            Some(existing) => {
                record.id = existing.id;
                record.created_at = existing.created_at;
            }
            None => {
                record.id = Some(self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
                record.created_at = Utc::now();
            }
        }
        records.insert(record.username.clone(), record.clone());
        trace!(username = %record.username, id = ?record.id, "store save");
        Ok(record)
    }
}
