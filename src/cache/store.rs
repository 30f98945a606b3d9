//! Cache Store Module
//!
//! Synchronized key/payload mapping shared between callers and the reaper.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

#[derive(Debug, Default)]
struct StoreInner {
    entries: HashMap<String, CacheEntry>,
    stats: CacheStats,
}

// == Store ==
/// Thread-safe mapping from string keys to byte payloads.
///
/// Cloning a `Store` yields another handle to the same mapping. Every
/// operation holds the single lock for its whole critical section and never
/// across an await point.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inner: Arc<Mutex<StoreInner>>,
}

impl Store {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Add ==
    /// Inserts or overwrites the payload for `key`, stamping it with the
    /// current instant.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        let entry = CacheEntry::new(value.into());
        let mut inner = self.inner.lock();
        inner.entries.insert(key.into(), entry);
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
    }

    // == Get ==
    /// Returns the payload stored under `key`, if any.
    ///
    /// Presence is all that matters here; staleness is only enforced by
    /// the reaper's sweeps.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        let mut inner = self.inner.lock();
        let value = inner.entries.get(key).map(|entry| entry.value.clone());
        match value {
            Some(_) => inner.stats.record_hit(),
            None => inner.stats.record_miss(),
        }
        value
    }

    // == Reap Stale ==
    /// Removes every entry older than `max_age` as of `now`.
    ///
    /// Returns the number of entries removed.
    pub fn reap_stale(&self, now: Instant, max_age: Duration) -> usize {
        let mut inner = self.inner.lock();
        let before = inner.entries.len();
        inner
            .entries
            .retain(|_, entry| !entry.is_stale(now, max_age));
        let after = inner.entries.len();

        let removed = before - after;
        inner.stats.record_reaped(removed);
        inner.stats.set_total_entries(after);
        removed
    }

    // == Length ==
    /// Returns the current number of entries.
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the store's counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats.clone()
    }
}
