//! Property mutation events.
//!
//! A typed broadcast channel carrying upstream mutation notifications. The
//! repository publishes on every committed row change; the invalidation
//! hooks subscribe. Payloads carry the mutated record, though subscribers
//! only need the fact that a mutation happened.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::models::Property;

/// Default capacity of the broadcast channel.
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

// == Property Event ==
/// A mutation of the authoritative property set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PropertyEvent {
    /// A property was created or updated
    Saved(Property),
    /// A property was deleted
    Deleted(Property),
}

// == Property Events ==
/// Handle for publishing and subscribing to property mutation events.
#[derive(Debug, Clone)]
pub struct PropertyEvents {
    sender: broadcast::Sender<PropertyEvent>,
}

impl PropertyEvents {
    /// Creates a new event channel with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_EVENT_CAPACITY)
    }

    /// Creates a new event channel with the given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publishes a saved event.
    pub fn publish_saved(&self, property: Property) {
        self.publish(PropertyEvent::Saved(property));
    }

    /// Publishes a deleted event.
    pub fn publish_deleted(&self, property: Property) {
        self.publish(PropertyEvent::Deleted(property));
    }

    /// Publishes an event. Having no subscribers is not an error.
    pub fn publish(&self, event: PropertyEvent) {
        let _ = self.sender.send(event);
    }

    /// Subscribes to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<PropertyEvent> {
        self.sender.subscribe()
    }

    /// Returns the number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for PropertyEvents {
    fn default() -> Self {
        Self::new()
    }
}
