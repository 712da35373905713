//! Store Statistics Module
//!
//! Cumulative keyspace hit/miss counters for the in-memory store, recorded
//! with the same semantics Redis uses for `keyspace_hits` and
//! `keyspace_misses` (a lookup of an expired key counts as a miss).

use std::sync::atomic::{AtomicU64, Ordering};

// == Keyspace Counters ==
/// Point-in-time snapshot of the cumulative counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KeyspaceCounters {
    /// Number of successful key lookups
    pub hits: u64,
    /// Number of failed key lookups (absent or expired)
    pub misses: u64,
}

// == Store Stats ==
/// Lock-free hit/miss counters shared across store handles.
#[derive(Debug, Default)]
pub struct StoreStats {
    hits: AtomicU64,
    misses: AtomicU64,
}

impl StoreStats {
    /// Creates counters starting at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increments the hit counter.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Increments the miss counter.
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a snapshot of the current counters.
    pub fn counters(&self) -> KeyspaceCounters {
        KeyspaceCounters {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = StoreStats::new();
        assert_eq!(stats.counters(), KeyspaceCounters::default());
    }

    #[test]
    fn test_record_hits_and_misses() {
        let stats = StoreStats::new();
        stats.record_hit();
        stats.record_hit();
        stats.record_miss();

        let counters = stats.counters();
        assert_eq!(counters.hits, 2);
        assert_eq!(counters.misses, 1);
    }

    #[test]
    fn test_counters_are_cumulative() {
        let stats = StoreStats::new();
        stats.record_miss();
        let first = stats.counters();
        stats.record_hit();
        let second = stats.counters();

        assert_eq!(first.misses, 1);
        assert_eq!(second.misses, 1);
        assert_eq!(second.hits, 1);
    }
}
