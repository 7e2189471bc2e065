//! User profile operations over the entry table and backing store.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, EntryTable};
use crate::error::{Result, ServiceError};
use crate::models::UserRecord;
use crate::store::{BackingStore, StoreError};

// == User Service ==
/// Cache-aside access to user profiles.
///
/// Cheap to clone; clones share the same store and entry table.
///
/// `read_latency` is paid by the uncached read and by a cached-read miss,
/// never by a hit, a create or an update. It is an awaited sleep, so a
/// dropped request cancels it.
#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn BackingStore>,
    cache: Arc<RwLock<EntryTable>>,
    read_latency: Duration,
}

impl UserService {
    // == Constructor ==
    /// Creates a service with an empty cache whose entries live for `ttl`.
    pub fn new(store: Arc<dyn BackingStore>, ttl: Duration) -> Self {
        Self {
            store,
            cache: Arc::new(RwLock::new(EntryTable::new(ttl))),
            read_latency: Duration::ZERO,
        }
    }

    /// Sets the simulated round trip added to store reads.
    pub fn with_read_latency(mut self, latency: Duration) -> Self {
        self.read_latency = latency;
        self
    }

    /// Shared handle to the entry table, used by the cleanup task.
    pub fn cache(&self) -> Arc<RwLock<EntryTable>> {
        Arc::clone(&self.cache)
    }

    // == Read Uncached ==
    /// Reads straight from the backing store, ignoring the cache entirely.
    pub async fn read_uncached(&self, username: &str) -> Result<UserRecord> {
        self.slow_read().await;
        self.fetch(username).await
    }

    // == Read Cached ==
    /// Read-through lookup.
    ///
    /// A live entry is returned without touching the store. On a miss the
    /// store is queried and a found record replaces any entry for the key.
    /// Absent records are not cached.
    pub async fn read_cached(&self, username: &str) -> Result<UserRecord> {
        if let Some(record) = self.cache.write().await.get(username) {
            debug!(username, "cache hit");
            return Ok(record);
        }

        debug!(username, "cache miss");
        self.slow_read().await;
        let record = self.fetch(username).await?;
        self.cache
            .write()
            .await
            .insert(username.to_string(), record.clone());
        Ok(record)
    }

    // == Create ==
    /// Saves a new record. Fails with `Conflict` if the username is taken.
    ///
    /// The cache is not pre-populated.
    pub async fn create(&self, record: UserRecord) -> Result<UserRecord> {
        if self.lookup(&record.username).await?.is_some() {
            return Err(ServiceError::Conflict(record.username));
        }

        let saved = self.save(record).await?;
        info!(username = %saved.username, id = ?saved.id, "user created");
        Ok(saved)
    }

    // == Update Status ==
    /// Read-modify-write of `status` against the store, bypassing the cache.
    ///
    /// With `evict` the cached entry is dropped after the save succeeds, so
    /// the next cached read observes the new status. Without it the cache is
    /// left alone and may serve the previous status until the entry expires.
    pub async fn update_status(
        &self,
        username: &str,
        status: impl Into<String>,
        evict: bool,
    ) -> Result<UserRecord> {
        let mut record = self.fetch(username).await?;
        record.status = status.into();
        let saved = self.save(record).await?;

        if evict {
            let evicted = self.cache.write().await.evict(username);
            debug!(username, evicted, "cache evict after update");
        }

        info!(username, status = %saved.status, evict, "user status updated");
        Ok(saved)
    }

    /// Snapshot of cache statistics.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    async fn slow_read(&self) {
        if !self.read_latency.is_zero() {
            tokio::time::sleep(self.read_latency).await;
        }
    }

    async fn fetch(&self, username: &str) -> Result<UserRecord> {
        self.lookup(username)
            .await?
            .ok_or_else(|| ServiceError::NotFound(username.to_string()))
    }

    async fn lookup(&self, username: &str) -> Result<Option<UserRecord>> {
        self.store
            .lookup(username)
            .await
            .map_err(|err| unavailable("lookup", err))
    }

    async fn save(&self, record: UserRecord) -> Result<UserRecord> {
        self.store
            .save(record)
            .await
            .map_err(|err| unavailable("save", err))
    }
}

fn unavailable(operation: &str, err: StoreError) -> ServiceError {
    warn!(operation, error = %err, "backing store unavailable");
    err.into()
}
