//! Read-Through Property Cache
//!
//! Serves the full property listing from the store when a live entry
//! exists, and repopulates it from the repository otherwise.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use crate::error::Result;
use crate::models::Property;
use crate::repository::PropertyRepository;
use crate::store::{CacheStore, ALL_PROPERTIES_KEY, PROPERTY_CACHE_TTL};

// == Property Cache ==
/// Read-through cache over the property repository.
pub struct PropertyCache {
    /// Store holding the cached listing
    store: Arc<dyn CacheStore>,
    /// Authoritative property source
    repo: Arc<dyn PropertyRepository>,
    /// TTL applied when repopulating the listing
    ttl: Duration,
}

impl PropertyCache {
    // == Constructor ==
    /// Creates a cache with the default 1-hour TTL.
    pub fn new(store: Arc<dyn CacheStore>, repo: Arc<dyn PropertyRepository>) -> Self {
        Self::with_ttl(store, repo, PROPERTY_CACHE_TTL)
    }

    /// Creates a cache with a custom TTL.
    pub fn with_ttl(
        store: Arc<dyn CacheStore>,
        repo: Arc<dyn PropertyRepository>,
        ttl: Duration,
    ) -> Self {
        Self { store, repo, ttl }
    }

    // == Get All Properties ==
    /// Returns the full property listing, from cache if available.
    ///
    /// On a hit the repository is not consulted. On a miss the current
    /// collection is fetched from the repository, written to the store
    /// under the well-known key with the configured TTL, and returned.
    ///
    /// A store or serialization failure propagates to the caller; there is
    /// no retry and no fallback read of the repository. Two concurrent
    /// misses may both query the repository and both write the store; the
    /// writes carry the same authoritative snapshot, so the last one wins
    /// without inconsistency.
    pub async fn get_all_properties(&self) -> Result<Vec<Property>> {
        if let Some(raw) = self.store.get(ALL_PROPERTIES_KEY).await? {
            let properties: Vec<Property> = serde_json::from_str(&raw)?;
            debug!("Serving {} properties from cache", properties.len());
            return Ok(properties);
        }

        let properties = self.repo.list_all().await?;
        let raw = serde_json::to_string(&properties)?;
        self.store.set(ALL_PROPERTIES_KEY, &raw, self.ttl).await?;
        debug!(
            "Repopulated property cache with {} properties, TTL {}s",
            properties.len(),
            self.ttl.as_secs()
        );

        Ok(properties)
    }
}
