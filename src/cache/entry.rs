//! Cache Entry Module
//!
//! A stored snapshot together with its expiry deadline.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A single cached value. Entries are replaced whole, never patched.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Encoded snapshot
    pub value: String,
    /// Monotonic instant after which the entry is treated as absent
    pub expires_at: Instant,
}

impl CacheEntry {
    /// Creates an entry that expires `ttl` from now.
    pub fn new(value: String, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: Instant::now() + ttl,
        }
    }

    /// An entry is expired once the current instant reaches its deadline,
    /// so a zero TTL is expired on arrival.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Instant::now())
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    /// Remaining lifetime, saturating at zero.
    pub fn ttl_remaining(&self) -> Duration {
        self.expires_at.saturating_duration_since(Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;

    #[test]
    fn test_entry_alive_before_deadline() {
        let entry = CacheEntry::new("[]".to_string(), Duration::from_secs(60));
        assert!(!entry.is_expired());
        assert!(entry.ttl_remaining() > Duration::from_secs(59));
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let entry = CacheEntry::new("[]".to_string(), Duration::from_millis(20));
        sleep(Duration::from_millis(40));
        assert!(entry.is_expired());
        assert_eq!(entry.ttl_remaining(), Duration::ZERO);
    }

    #[test]
    fn test_zero_ttl_is_expired_immediately() {
        let entry = CacheEntry::new("{}".to_string(), Duration::ZERO);
        assert!(entry.is_expired_at(entry.expires_at));
    }
}
