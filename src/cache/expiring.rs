//! Expiring Cache Module
//!
//! Couples a [`Store`] with its background reaper and gives the pair an
//! explicit lifecycle.

use std::time::Duration;

use bytes::Bytes;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::cache::{CacheStats, Store};
use crate::tasks::spawn_reaper;

// == Cache ==
/// Thread-safe, time-expiring cache of byte payloads.
///
/// A single `interval` is both the sweep period and the staleness
/// threshold, so an entry that is never refreshed is present for at least
/// `interval` and gone before `2 * interval`.
///
/// The reaper stops when [`Cache::close`] or [`Cache::shutdown`] is called, or when the cache is
/// dropped. `add` and `get` keep working after close; entries just stop
/// expiring.
#[derive(Debug)]
pub struct Cache {
    store: Store,
    interval: Duration,
    shutdown: watch::Sender<bool>,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl Cache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper on the current tokio
    /// runtime.
    ///
    /// # Panics
    /// Panics if called outside a tokio runtime.
    pub fn new(interval: Duration) -> Self {
        let store = Store::new();
        let (shutdown, shutdown_rx) = watch::channel(false);
        let reaper = spawn_reaper(store.clone(), interval, shutdown_rx);

        Self {
            store,
            interval,
            shutdown,
            reaper: Mutex::new(Some(reaper)),
        }
    }

    // == Add ==
    /// Inserts or overwrites `key`, restarting its staleness window.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Bytes>) {
        self.store.add(key, value);
    }

    // == Get ==
    /// Returns the payload for `key` if it has not been reaped yet.
    pub fn get(&self, key: &str) -> Option<Bytes> {
        self.store.get(key)
    }

    // == Close ==
    /// Signals the reaper to stop. Safe to call any number of times.
    pub fn close(&self) {
        let was_closed = self.shutdown.send_replace(true);
        if !was_closed {
            info!("Cache closed, reaper signalled to stop");
        }
    }

    /// Closes the cache and waits for the reaper task to finish.
    ///
    /// Once this returns the handle is released, so later calls only
    /// re-send the stop signal.
    pub async fn shutdown(&self) {
        self.close();
        let reaper = self.reaper.lock().take();
        if let Some(handle) = reaper {
            if let Err(err) = handle.await {
                warn!("Cache reaper ended abnormally: {}", err);
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        *self.shutdown.borrow()
    }

    /// Returns true while the reaper task is still alive. After
    /// [`Cache::shutdown`] has joined it, this is always false.
    pub fn is_reaper_running(&self) -> bool {
        self.reaper
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Accessors ==
    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns a snapshot of hit/miss/reap counters.
    pub fn stats(&self) -> CacheStats {
        self.store.stats()
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        self.close();
    }
}
