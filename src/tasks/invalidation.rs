//! Cache Invalidation Hooks
//!
//! Subscribes to the property mutation events and deletes the cached
//! listing, so the next read misses and repopulates from the repository.
//!
//! Events are dispatched on the in-process bus as soon as the row mutation
//! lands, not on a durable commit. A concurrent read that misses in that
//! window can repopulate the cache with the pre-mutation snapshot, which
//! then survives until the next invalidation or TTL expiry. This window is
//! documented, accepted behavior; the hooks add no locking around it.

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::events::PropertyEvent;
use crate::models::Property;
use crate::store::{CacheStore, ALL_PROPERTIES_KEY};

/// Spawns the subscriber task wiring both invalidation hooks to the event
/// stream.
///
/// The task runs until the event channel closes. A lagged receiver has
/// missed an unknown number of mutations, so the key is dropped once
/// before resuming.
///
/// # Arguments
/// * `store` - Store holding the cached listing
/// * `rx` - Subscription to the property mutation events
///
/// # Returns
/// A JoinHandle for the spawned task, used to abort it during graceful
/// shutdown.
pub fn spawn_invalidation_hooks(
    store: Arc<dyn CacheStore>,
    mut rx: broadcast::Receiver<PropertyEvent>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        info!("Starting property cache invalidation hooks");

        loop {
            match rx.recv().await {
                Ok(PropertyEvent::Saved(property)) => {
                    on_property_saved(store.as_ref(), &property).await;
                }
                Ok(PropertyEvent::Deleted(property)) => {
                    on_property_deleted(store.as_ref(), &property).await;
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Invalidation hooks lagged, {} events skipped", skipped);
                    invalidate_listing(store.as_ref()).await;
                }
                Err(RecvError::Closed) => {
                    info!("Property event channel closed, stopping invalidation hooks");
                    break;
                }
            }
        }
    })
}

/// Hook for a created or updated property: drops the cached listing.
pub async fn on_property_saved(store: &dyn CacheStore, property: &Property) {
    debug!("Property '{}' saved, invalidating cached listing", property.id);
    invalidate_listing(store).await;
}

/// Hook for a deleted property: drops the cached listing.
pub async fn on_property_deleted(store: &dyn CacheStore, property: &Property) {
    debug!(
        "Property '{}' deleted, invalidating cached listing",
        property.id
    );
    invalidate_listing(store).await;
}

/// Deletes the well-known listing key unconditionally.
///
/// Deleting an absent key is a no-op. A store failure is logged and
/// swallowed; the hook has no caller to propagate to.
async fn invalidate_listing(store: &dyn CacheStore) {
    if let Err(err) = store.delete(ALL_PROPERTIES_KEY).await {
        warn!("Failed to invalidate property cache: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::events::PropertyEvents;
    use crate::store::MemoryStore;

    async fn seeded_store() -> Arc<MemoryStore> {
        let store = Arc::new(MemoryStore::new());
        store
            .set(ALL_PROPERTIES_KEY, "[]", Duration::from_secs(3600))
            .await
            .unwrap();
        store
    }

    #[tokio::test]
    async fn test_saved_hook_deletes_listing_key() {
        let store = seeded_store().await;
        let property = Property::new("Flat", "", 90_000.0, "Gdansk");

        on_property_saved(store.as_ref(), &property).await;

        assert_eq!(store.get(ALL_PROPERTIES_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_deleted_hook_deletes_listing_key() {
        let store = seeded_store().await;
        let property = Property::new("Flat", "", 90_000.0, "Gdansk");

        on_property_deleted(store.as_ref(), &property).await;

        assert_eq!(store.get(ALL_PROPERTIES_KEY).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_hooks_are_noop_on_absent_key() {
        let store = Arc::new(MemoryStore::new());
        let property = Property::new("Flat", "", 90_000.0, "Gdansk");

        // Must not panic or log an error path that breaks the hook
        on_property_saved(store.as_ref(), &property).await;
        on_property_deleted(store.as_ref(), &property).await;

        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_subscriber_task_invalidates_on_saved_event() {
        let store = seeded_store().await;
        let events = PropertyEvents::new();
        let handle = spawn_invalidation_hooks(store.clone(), events.subscribe());

        events.publish_saved(Property::new("Flat", "", 90_000.0, "Gdansk"));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(store.get(ALL_PROPERTIES_KEY).await.unwrap(), None);
        handle.abort();
    }

    #[tokio::test]
    async fn test_subscriber_task_invalidates_on_deleted_event() {
        let store = seeded_store().await;
        let events = PropertyEvents::new();
        let handle = spawn_invalidation_hooks(store.clone(), events.subscribe());

        events.publish_deleted(Property::new("Flat", "", 90_000.0, "Gdansk"));
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert_eq!(store.get(ALL_PROPERTIES_KEY).await.unwrap(), None);
        handle.abort();
    }

    #[tokio::test]
    async fn test_subscriber_task_stops_when_channel_closes() {
        let store = Arc::new(MemoryStore::new());
        let events = PropertyEvents::new();
        let handle = spawn_invalidation_hooks(store, events.subscribe());

        drop(events);
        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(handle.is_finished());
    }
}
