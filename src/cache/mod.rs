//! Cache Module
//!
//! In-memory entry table with TTL expiration and explicit eviction. The table
//! is a disposable projection of the backing store: clearing it loses no data.

mod entry;
mod stats;
mod table;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use table::EntryTable;
