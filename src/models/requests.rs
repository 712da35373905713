//! Request DTOs for the property listing API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

/// Request body for creating a property (POST /properties)
///
/// # Fields
/// - `title`: Listing title, non-empty, at most 200 characters
/// - `description`: Free-form description (optional)
/// - `price`: Asking price, must not be negative
/// - `location`: Location string, non-empty, at most 100 characters
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePropertyRequest {
    /// Listing title
    pub title: String,
    /// Free-form description
    #[serde(default)]
    pub description: String,
    /// Asking price
    pub price: f64,
    /// Location
    pub location: String,
}

impl CreatePropertyRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.title.trim().is_empty() {
            return Some("Title cannot be empty".to_string());
        }
        if self.title.len() > 200 {
            return Some("Title exceeds maximum length of 200 characters".to_string());
        }
        if self.price < 0.0 || !self.price.is_finite() {
            return Some("Price must be a non-negative number".to_string());
        }
        if self.location.trim().is_empty() {
            return Some("Location cannot be empty".to_string());
        }
        if self.location.len() > 100 {
            return Some("Location exceeds maximum length of 100 characters".to_string());
        }
        None
    }
}
