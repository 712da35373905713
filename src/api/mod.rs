//! API Module
//!
//! HTTP handlers and routing for the property listing REST API.
//!
//! # Endpoints
//! - `GET /properties` - Serve the cached property listing
//! - `POST /properties` - Create a property
//! - `DELETE /properties/:id` - Delete a property
//! - `GET /metrics/cache` - Cache keyspace metrics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
