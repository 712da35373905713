//! Cache Metrics Probe
//!
//! Reads the store's cumulative keyspace counters and derives a health
//! snapshot. This is the only component with failure recovery: every probe
//! failure is logged and converted into the degraded report variant, none
//! propagates to the caller.

use serde::Serialize;
use tracing::{error, info};

use crate::store::{KeyspaceCounters, StoreAdmin};

/// Hit ratio above which the cache is considered healthy (strict).
pub const HEALTHY_HIT_RATIO: f64 = 0.7;

// == Cache Health ==
/// Health classification derived from the hit ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CacheHealth {
    /// Hit ratio strictly above the threshold
    Healthy,
    /// Hit ratio at or below the threshold
    NeedsAttention,
    /// Counters could not be read
    Unavailable,
}

impl std::fmt::Display for CacheHealth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Healthy => write!(f, "healthy"),
            Self::NeedsAttention => write!(f, "needs_attention"),
            Self::Unavailable => write!(f, "unavailable"),
        }
    }
}

// == Metrics Snapshot ==
/// Point-in-time view of the store's keyspace counters.
///
/// Recomputed on every probe call, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    /// Cumulative keyspace hits since store start
    pub hits: u64,
    /// Cumulative keyspace misses since store start
    pub misses: u64,
    /// hits / (hits + misses), rounded to 4 decimal places, 0.0 when idle
    pub hit_ratio: f64,
    /// hits + misses
    pub total_operations: u64,
    /// Health classification at the 0.7 threshold
    pub status: CacheHealth,
}

impl MetricsSnapshot {
    /// Derives a snapshot from raw counters.
    pub fn from_counters(counters: KeyspaceCounters) -> Self {
        let total = counters.hits + counters.misses;
        let hit_ratio = if total > 0 {
            round4(counters.hits as f64 / total as f64)
        } else {
            0.0
        };
        // Status follows the reported ratio, so the two never disagree
        let status = if hit_ratio > HEALTHY_HIT_RATIO {
            CacheHealth::Healthy
        } else {
            CacheHealth::NeedsAttention
        };

        Self {
            hits: counters.hits,
            misses: counters.misses,
            hit_ratio,
            total_operations: total,
            status,
        }
    }
}

// == Metrics Report ==
/// Probe outcome: a snapshot, or a degraded result carrying the failure.
///
/// Callers must handle both variants; the probe itself never returns `Err`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MetricsReport {
    /// Counters were read successfully
    Available(MetricsSnapshot),
    /// The admin connection or the counter read failed
    Unavailable {
        /// Description of the failure
        error: String,
        /// Always `unavailable`
        status: CacheHealth,
    },
}

impl MetricsReport {
    /// Builds the degraded variant from a failure description.
    pub fn unavailable(error: impl Into<String>) -> Self {
        Self::Unavailable {
            error: error.into(),
            status: CacheHealth::Unavailable,
        }
    }
}

// == Probe ==
/// Reads the store's keyspace counters and reports cache effectiveness.
///
/// Emits one informational log record per successful probe. Any failure is
/// caught, logged at error level, and returned as the degraded variant.
pub async fn get_redis_cache_metrics(admin: &dyn StoreAdmin) -> MetricsReport {
    match admin.keyspace_stats().await {
        Ok(counters) => {
            let snapshot = MetricsSnapshot::from_counters(counters);
            info!(
                "Cache keyspace metrics: hits={} misses={} hit_ratio={:.2}% status={}",
                snapshot.hits,
                snapshot.misses,
                snapshot.hit_ratio * 100.0,
                snapshot.status
            );
            MetricsReport::Available(snapshot)
        }
        Err(err) => {
            error!("Failed to read cache keyspace metrics: {}", err);
            MetricsReport::unavailable(err.to_string())
        }
    }
}

/// Rounds to 4 decimal places.
fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}
