//! Property Listings - a property listing service with read-through caching
//!
//! Serves a property collection from a TTL-bound cache entry, invalidated
//! by mutation events and observable through a keyspace metrics probe.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod events;
pub mod metrics;
pub mod models;
pub mod repository;
pub mod store;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
