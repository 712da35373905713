//! Domain model and API DTOs
//!
//! Contains the property domain type and the DTOs (Data Transfer Objects)
//! used for serializing/deserializing HTTP request and response bodies.

pub mod property;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use property::Property;
pub use requests::CreatePropertyRequest;
pub use responses::{
    CreatedResponse, DeleteResponse, ErrorResponse, HealthResponse, PropertyListResponse,
};
