//! Property Domain Model
//!
//! The listing record served by the API and cached as a collection.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// == Property ==
/// A single property listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier
    pub id: Uuid,
    /// Listing title (max 200 characters)
    pub title: String,
    /// Free-form description
    pub description: String,
    /// Asking price
    pub price: f64,
    /// Location (max 100 characters)
    pub location: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Property {
    /// Creates a new property with a fresh id and the current timestamp.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: description.into(),
            price,
            location: location.into(),
            created_at: Utc::now(),
        }
    }
}
