//! Stored Entry Module
//!
//! Defines the structure for individual store entries with TTL support.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

// == Stored Entry ==
/// A single value held by the in-memory store.
#[derive(Debug, Clone)]
pub struct StoredEntry {
    /// The stored value
    pub value: String,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl StoredEntry {
    // == Constructor ==
    /// Creates a new entry expiring `ttl` from now.
    pub fn new(value: String, ttl: Duration) -> Self {
        let now = current_timestamp_ms();
        Self {
            value,
            created_at: now,
            expires_at: now + ttl.as_millis() as u64,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// Boundary condition: an entry is expired when the current time is
    /// greater than or equal to the expiration time, so an entry becomes
    /// unavailable the instant its TTL has fully elapsed.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Remaining TTL ==
    /// Returns the remaining TTL, clamped to zero once expired.
    ///
    /// Useful for diagnostics and for asserting expiry deadlines in tests.
    pub fn remaining_ttl(&self) -> Duration {
        let now = current_timestamp_ms();
        if self.expires_at > now {
            Duration::from_millis(self.expires_at - now)
        } else {
            Duration::ZERO
        }
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_creation() {
        let entry = StoredEntry::new("payload".to_string(), Duration::from_secs(60));

        assert_eq!(entry.value, "payload");
        assert!(entry.expires_at > entry.created_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        let entry = StoredEntry::new("payload".to_string(), Duration::from_millis(50));

        assert!(!entry.is_expired());
        sleep(Duration::from_millis(80));
        assert!(entry.is_expired());
    }

    #[test]
    fn test_remaining_ttl() {
        let entry = StoredEntry::new("payload".to_string(), Duration::from_secs(10));

        let remaining = entry.remaining_ttl();
        assert!(remaining <= Duration::from_secs(10));
        assert!(remaining >= Duration::from_secs(9));
    }

    #[test]
    fn test_remaining_ttl_expired() {
        let entry = StoredEntry::new("payload".to_string(), Duration::from_millis(10));

        sleep(Duration::from_millis(30));
        assert_eq!(entry.remaining_ttl(), Duration::ZERO);
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = StoredEntry {
            value: "payload".to_string(),
            created_at: now,
            expires_at: now, // expires exactly at creation time
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
