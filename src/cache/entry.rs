//! Cache Entry Module
//!
//! Defines a single cached payload and the instant it was inserted.

use std::time::Duration;

use bytes::Bytes;
use tokio::time::Instant;

// == Cache Entry ==
/// A stored payload paired with its insertion instant.
///
/// Entries are never mutated; re-adding a key replaces the whole entry,
/// which is what resets its expiry clock.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Bytes,
    /// When the payload was inserted
    pub inserted_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: Bytes) -> Self {
        Self::inserted_at(value, Instant::now())
    }

    /// Creates an entry stamped with an explicit instant.
    pub fn inserted_at(value: Bytes, inserted_at: Instant) -> Self {
        Self { value, inserted_at }
    }

    // == Age ==
    /// Returns how long the entry has been stored as of `now`.
    ///
    /// Saturates to zero if `now` is earlier than the insertion instant.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.inserted_at)
    }

    // == Is Stale ==
    /// Checks whether the entry is older than `max_age`.
    ///
    /// The comparison is strict: an entry exactly `max_age` old is kept.
    pub fn is_stale(&self, now: Instant, max_age: Duration) -> bool {
        self.age(now) > max_age
    }
}
