//! Store Module
//!
//! Key/value store adapters for the cached property listing: a trait pair
//! for the data and admin capabilities, a Redis-backed implementation, and
//! an in-memory implementation with the same TTL semantics.

use std::time::Duration;

mod entry;
mod interface;
mod memory;
mod redis;
mod stats;


// Re-export public types
pub use entry::StoredEntry;
pub use interface::{CacheStore, StoreAdmin};
pub use memory::MemoryStore;
pub use redis::RedisStore;
pub use stats::{KeyspaceCounters, StoreStats};

// == Public Constants ==
/// Well-known key under which the serialized property listing is cached
pub const ALL_PROPERTIES_KEY: &str = "all_properties";

/// TTL applied to the cached property listing (1 hour)
pub const PROPERTY_CACHE_TTL: Duration = Duration::from_secs(3600);
