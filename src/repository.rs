//! Property Repository Module
//!
//! The authoritative source of property records. The read-through cache
//! depends on the trait so tests can substitute counting or failing fakes;
//! the in-memory implementation publishes a mutation event right after
//! every committed row change.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::events::PropertyEvents;
use crate::models::Property;

// == Repository Trait ==
/// Query and mutation capability over the authoritative property set.
#[async_trait]
pub trait PropertyRepository: Send + Sync {
    /// Returns the full, unfiltered property collection.
    async fn list_all(&self) -> Result<Vec<Property>>;

    /// Inserts a property and returns it.
    async fn insert(&self, property: Property) -> Result<Property>;

    /// Removes a property by id and returns the removed record.
    async fn remove(&self, id: Uuid) -> Result<Property>;
}

// == In-Memory Repository ==
/// Vec-backed repository publishing mutation events on the property bus.
#[derive(Debug)]
pub struct InMemoryPropertyRepository {
    /// Property rows
    rows: RwLock<Vec<Property>>,
    /// Mutation event channel
    events: PropertyEvents,
}

impl InMemoryPropertyRepository {
    /// Creates an empty repository publishing on the given event channel.
    pub fn new(events: PropertyEvents) -> Self {
        Self {
            rows: RwLock::new(Vec::new()),
            events,
        }
    }

    /// Creates a repository pre-populated with the given rows.
    pub fn with_rows(events: PropertyEvents, rows: Vec<Property>) -> Self {
        Self {
            rows: RwLock::new(rows),
            events,
        }
    }
}

#[async_trait]
impl PropertyRepository for InMemoryPropertyRepository {
    async fn list_all(&self) -> Result<Vec<Property>> {
        Ok(self.rows.read().await.clone())
    }

    async fn insert(&self, property: Property) -> Result<Property> {
        {
            let mut rows = self.rows.write().await;
            rows.push(property.clone());
        }
        // Event goes out after the row change has landed
        self.events.publish_saved(property.clone());
        Ok(property)
    }

    async fn remove(&self, id: Uuid) -> Result<Property> {
        let removed = {
            let mut rows = self.rows.write().await;
            let position = rows.iter().position(|p| p.id == id);
            match position {
                Some(index) => rows.remove(index),
                None => return Err(AppError::NotFound(id.to_string())),
            }
        };
        self.events.publish_deleted(removed.clone());
        Ok(removed)
    }
}
