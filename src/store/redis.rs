//! Redis Store Module
//!
//! Redis-backed implementation of the store capabilities. Data operations go
//! through a shared `ConnectionManager`; the admin probe opens a fresh
//! connection per call, so a probe failure never poisons the data path.

use std::time::Duration;

use async_trait::async_trait;
use redis::{aio::ConnectionManager, AsyncCommands, Client};
use tracing::debug;

use crate::error::{AppError, Result};

use super::interface::{CacheStore, StoreAdmin};
use super::stats::KeyspaceCounters;

// == Redis Store ==
/// Store adapter backed by a Redis server.
#[derive(Clone)]
pub struct RedisStore {
    /// Client handle, used to open admin connections
    client: Client,
    /// Shared managed connection for data operations
    conn: ConnectionManager,
}

impl RedisStore {
    // == Constructor ==
    /// Connects to the Redis server at the given URL.
    pub async fn connect(url: &str) -> Result<Self> {
        let client = Client::open(url)
            .map_err(|e| AppError::StoreUnavailable(format!("Invalid Redis URL: {}", e)))?;
        let conn = client
            .get_connection_manager()
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to connect to Redis: {}", e)))?;
        Ok(Self { client, conn })
    }
}

#[async_trait]
impl CacheStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn
            .get(key)
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to get key '{}': {}", key, e)))?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<()> {
        let mut conn = self.conn.clone();
        let ttl_secs = ttl.as_secs().max(1);

        conn.set_ex::<_, _, ()>(key, value, ttl_secs)
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to set key '{}': {}", key, e)))?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let deleted: i64 = conn.del(key).await.map_err(|e| {
            AppError::StoreUnavailable(format!("Failed to delete key '{}': {}", key, e))
        })?;

        debug!("Deleted key '{}': {}", key, deleted > 0);
        Ok(())
    }
}

#[async_trait]
impl StoreAdmin for RedisStore {
    async fn keyspace_stats(&self) -> Result<KeyspaceCounters> {
        // Fresh connection per probe call, not taken from the managed one.
        let mut conn = self
            .client
            .get_multiplexed_async_connection()
            .await
            .map_err(|e| {
                AppError::StoreUnavailable(format!("Failed to open admin connection: {}", e))
            })?;

        let info: redis::InfoDict = redis::cmd("INFO")
            .arg("stats")
            .query_async(&mut conn)
            .await
            .map_err(|e| AppError::StoreUnavailable(format!("Failed to read INFO stats: {}", e)))?;

        let hits: u64 = info.get("keyspace_hits").unwrap_or(0);
        let misses: u64 = info.get("keyspace_misses").unwrap_or(0);

        Ok(KeyspaceCounters { hits, misses })
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_rejects_invalid_url() {
        let result = RedisStore::connect("not a redis url").await;
        assert!(matches!(result, Err(AppError::StoreUnavailable(_))));
    }
}
