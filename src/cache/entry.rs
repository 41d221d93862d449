//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use chrono::{DateTime, TimeDelta, Utc};

// == Cache Entry ==
/// Represents a single cache entry with value and expiry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Absolute expiration instant, None = no expiration
    pub expires_at: Option<DateTime<Utc>>,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new cache entry with optional TTL.
    ///
    /// The expiry is fixed here, once, as `now + ttl`. Zero and negative TTLs
    /// yield an entry that is already eligible for the next sweep. An expiry
    /// past the representable range saturates instead of overflowing.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `ttl` - Optional TTL, None means the entry never expires
    pub fn new(value: V, ttl: Option<TimeDelta>) -> Self {
        let expires_at = ttl.map(|ttl| {
            Utc::now()
                .checked_add_signed(ttl)
                .unwrap_or(if ttl < TimeDelta::zero() {
                    DateTime::<Utc>::MIN_UTC
                } else {
                    DateTime::<Utc>::MAX_UTC
                })
        });

        Self { value, expires_at }
    }

    // == Is Expired ==
    /// Checks if the entry had expired at `now`.
    ///
    /// Boundary condition: an entry is expired only once its expiry is
    /// strictly in the past. An entry expiring exactly at `now` is still live.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires) => expires < now,
            None => false,
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation_no_ttl() {
        let entry = CacheEntry::new("test_value", None);

        assert_eq!(entry.value, "test_value");
        assert!(entry.expires_at.is_none());
        assert!(!entry.is_expired_at(DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn test_entry_creation_with_ttl() {
        let before = Utc::now();
        let entry = CacheEntry::new(42u32, Some(TimeDelta::seconds(60)));
        let after = Utc::now();

        let expires = entry.expires_at.unwrap();
        assert!(expires >= before + TimeDelta::seconds(60));
        assert!(expires <= after + TimeDelta::seconds(60));
        assert!(!entry.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_entry_negative_ttl_is_expired() {
        let entry = CacheEntry::new((), Some(TimeDelta::seconds(-5)));

        assert!(entry.is_expired_at(Utc::now()));
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = Utc::now();
        let entry = CacheEntry {
            value: "test",
            expires_at: Some(now),
        };

        // Expiring exactly now is not yet in the past
        assert!(!entry.is_expired_at(now));
        assert!(entry.is_expired_at(now + TimeDelta::milliseconds(1)));
    }

    #[test]
    fn test_entry_huge_ttl_saturates() {
        let entry = CacheEntry::new("v", Some(TimeDelta::MAX));

        assert_eq!(entry.expires_at, Some(DateTime::<Utc>::MAX_UTC));
    }

    #[test]
    fn test_entry_huge_negative_ttl_saturates() {
        let entry = CacheEntry::new("v", Some(TimeDelta::MIN));

        assert_eq!(entry.expires_at, Some(DateTime::<Utc>::MIN_UTC));
    }
}
