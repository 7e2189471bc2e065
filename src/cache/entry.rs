//! Cache Entry Module
//!
//! Defines the wrapper placed around a cached value with its insertion time.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// Represents a single cache entry with value and insertion time.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value
    pub value: V,
    /// When the entry was placed in the cache
    pub inserted_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry stamped with the current time.
    pub fn new(value: V) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
        }
    }

    /// Time since insertion.
    pub fn age(&self) -> Duration {
        self.inserted_at.elapsed()
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry whose age equals the TTL is already
    /// expired, so a zero TTL expires every entry on arrival.
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.age() >= ttl
    }
}
