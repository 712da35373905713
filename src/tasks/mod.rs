//! Background Tasks Module
//!
//! Contains background tasks that run during service operation.
//!
//! # Tasks
//! - Invalidation hooks: subscribe to property mutation events and drop the
//!   cached listing
//! - Purge: removes expired entries from the in-memory store backend at
//!   configured intervals

mod cleanup;
mod invalidation;

pub use cleanup::spawn_purge_task;
pub use invalidation::{on_property_deleted, on_property_saved, spawn_invalidation_hooks};
