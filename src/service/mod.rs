//! Cache-Aside Service
//!
//! Read-through caching over a `BackingStore`, with evict-on-write left to
//! the caller's choice.
//!
//! The cache lock is only held for individual table operations, never across
//! a store round trip. Two concurrent misses may therefore both populate the
//! same key (last write wins), and an eviction racing a miss may be followed
//! by a stale repopulation that lives until the next TTL boundary.

mod users;


pub use users::UserService;
