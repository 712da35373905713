//! Response DTOs for the property listing API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use uuid::Uuid;

use super::Property;

/// Response body for the listing endpoint (GET /properties)
#[derive(Debug, Clone, Serialize)]
pub struct PropertyListResponse {
    /// Number of properties in the listing
    pub count: usize,
    /// The full property collection
    pub properties: Vec<Property>,
}

impl PropertyListResponse {
    /// Creates a new PropertyListResponse
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            count: properties.len(),
            properties,
        }
    }
}

/// Response body for property creation (POST /properties)
#[derive(Debug, Clone, Serialize)]
pub struct CreatedResponse {
    /// Success message
    pub message: String,
    /// The property that was created
    pub property: Property,
}

impl CreatedResponse {
    /// Creates a new CreatedResponse
    pub fn new(property: Property) -> Self {
        Self {
            message: format!("Property '{}' created successfully", property.title),
            property,
        }
    }
}

/// Response body for property removal (DELETE /properties/:id)
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The id that was removed
    pub id: Uuid,
}

impl DeleteResponse {
    /// Creates a new DeleteResponse
    pub fn new(id: Uuid) -> Self {
        Self {
            message: format!("Property '{}' deleted successfully", id),
            id,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
