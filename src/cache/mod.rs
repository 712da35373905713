//! Cache Module
//!
//! Read-through caching of the property listing in front of the
//! authoritative repository.

mod properties;


pub use properties::PropertyCache;
