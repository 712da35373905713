//! Store capability traits.
//!
//! The cache core depends on these traits rather than a concrete client so
//! tests can substitute the in-memory store for the Redis-backed one.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::Result;

use super::stats::KeyspaceCounters;

/// Minimal key/value capability used by the read-through cache and the
/// invalidation hooks.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Get a raw value from the store.
    ///
    /// Returns `None` if the key doesn't exist or has expired.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Set a raw value in the store with a TTL.
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()>;

    /// Delete a key from the store.
    ///
    /// Deleting a key that does not exist is a no-op, not an error.
    async fn delete(&self, key: &str) -> Result<()>;
}

/// Administrative capability: cumulative keyspace hit/miss counters since
/// store start.
#[async_trait]
pub trait StoreAdmin: Send + Sync {
    /// Read the store's cumulative keyspace counters.
    async fn keyspace_stats(&self) -> Result<KeyspaceCounters>;
}
