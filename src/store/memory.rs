//! In-Memory Store Module
//!
//! HashMap-backed store with absolute-expiry TTL, used when no Redis URL is
//! configured and as the substitutable backend in tests. Expired entries are
//! dropped lazily on read and in bulk by the periodic purge task.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::Result;

use super::entry::StoredEntry;
use super::interface::{CacheStore, StoreAdmin};
use super::stats::{KeyspaceCounters, StoreStats};

// == Memory Store ==
/// In-memory key/value store with TTL expiry and keyspace counters.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key-value storage
    entries: RwLock<HashMap<String, StoredEntry>>,
    /// Cumulative hit/miss counters
    stats: StoreStats,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Purge Expired ==
    /// Removes all expired entries from the store.
    ///
    /// Returns the number of entries removed.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired());
        before - entries.len()
    }

    // == Remaining TTL ==
    /// Returns the remaining TTL of a live entry, or None if the key is
    /// absent or already expired.
    pub async fn remaining_ttl(&self, key: &str) -> Option<Duration> {
        let entries = self.entries.read().await;
        entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(StoredEntry::remaining_ttl)
    }

    // == Length ==
    /// Returns the current number of entries, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut entries = self.entries.write().await;
        match entries.get(key) {
            Some(entry) if entry.is_expired() => {
                entries.remove(key);
                self.stats.record_miss();
                Ok(None)
            }
            Some(entry) => {
                self.stats.record_hit();
                Ok(Some(entry.value.clone()))
            }
            None => {
                self.stats.record_miss();
                Ok(None)
            }
        }
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut entries = self.entries.write().await;
        entries.insert(key.to_string(), StoredEntry::new(value.to_string(), ttl));
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write().await;
        let existed = entries.remove(key).is_some();
        debug!("Deleted key '{}': {}", key, existed);
        Ok(())
    }
}

#[async_trait]
impl StoreAdmin for MemoryStore {
    async fn keyspace_stats(&self) -> Result<KeyspaceCounters> {
        Ok(self.stats.counters())
    }
}
