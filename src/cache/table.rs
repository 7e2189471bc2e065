//! Entry Table Module
//!
//! Key → entry map with lazy TTL expiration and explicit eviction.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats};
use crate::models::UserRecord;

// == Entry Table ==
/// Holds at most one entry per key. Entries older than `ttl` are never
/// returned; they are dropped on the read that finds them or by
/// `purge_expired`.
#[derive(Debug)]
pub struct EntryTable<V = UserRecord> {
    /// Key → entry storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Performance statistics
    stats: CacheStats,
    /// Entry lifetime measured from insertion
    ttl: Duration,
}

impl<V: Clone> EntryTable<V> {
    // == Constructor ==
    /// Creates an empty table whose entries live for `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    // == Get ==
    /// Returns a clone of the live value for `key`.
    ///
    /// An expired entry is removed and the read counts as a miss.
    pub fn get(&mut self, key: &str) -> Option<V> {
        let ttl = self.ttl;
        match self.entries.get(key) {
            Some(entry) if !entry.is_expired(ttl) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            Some(_) => {
                self.entries.remove(key);
                self.stats.record_expirations(1);
                self.stats.record_miss();
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Places `value` under `key`, replacing any prior entry and
    /// restarting its TTL.
    pub fn insert(&mut self, key: String, value: V) {
        self.entries.insert(key, CacheEntry::new(value));
    }

    // == Evict ==
    /// Removes the entry for `key`. Returns whether one was present.
    pub fn evict(&mut self, key: &str) -> bool {
        let removed = self.entries.remove(key).is_some();
        if removed {
            self.stats.record_eviction();
        }
        removed
    }

    /// Returns true if `key` has a live entry, without touching stats.
    pub fn contains(&self, key: &str) -> bool {
        self.entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired(self.ttl))
    }

    // == Purge Expired ==
    /// Removes every expired entry. Returns the number removed.
    pub fn purge_expired(&mut self) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(ttl));

        let removed = before - self.entries.len();
        self.stats.record_expirations(removed);
        removed
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
