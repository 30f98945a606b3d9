//! Reaper Task
//!
//! Background task that periodically evicts stale cache entries.

use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::cache::Store;

/// Deadline used when `now + interval` does not fit in an `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(86_400 * 365 * 30);

/// Returns `now + interval`, clamped for intervals too large to represent.
fn next_deadline(interval: Duration) -> Instant {
    let now = Instant::now();
    now.checked_add(interval)
        .or_else(|| now.checked_add(FAR_FUTURE))
        .unwrap_or(now)
}

/// Spawns the sweep loop for `store`.
///
/// The task sleeps for `interval`, then removes every entry older than
/// `interval`, and repeats. Because the sweep period and the expiry
/// threshold are the same value, an entry can survive for just under two
/// intervals before a sweep catches it.
///
/// The first deadline is fixed when this function is called, not when the
/// task is first polled.
///
/// The loop exits when `shutdown` observes `true` or when its sender is
/// dropped. An empty store never ends the loop.
///
/// # Panics
/// Panics if called outside a tokio runtime.
pub fn spawn_reaper(
    store: Store,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    let first_deadline = next_deadline(interval);

    tokio::spawn(async move {
        info!("Starting cache reaper with interval of {:?}", interval);

        let mut deadline = first_deadline;
        loop {
            if *shutdown.borrow_and_update() {
                break;
            }

            tokio::select! {
                biased;
                changed = shutdown.changed() => {
                    if changed.is_err() {
                        break;
                    }
                    continue;
                }
                _ = tokio::time::sleep_until(deadline) => {}
            }

            let removed = store.reap_stale(Instant::now(), interval);
            if removed > 0 {
                info!("Cache sweep: removed {} stale entries", removed);
            } else {
                debug!("Cache sweep: no stale entries found");
            }

            deadline = next_deadline(interval);
        }

        info!("Cache reaper stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[tokio::test(start_paused = true)]
    async fn test_reaper_removes_stale_entries() {
        let store = Store::new();
        let (_tx, rx) = watch::channel(false);
        store.add("expire_soon", "value");

        let handle = spawn_reaper(store.clone(), INTERVAL, rx);

        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(store.get("expire_soon").is_none(), "Stale entry should have been reaped");
        assert_eq!(store.stats().reaped, 1);

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_keeps_entry_exactly_one_interval_old() {
        let store = Store::new();
        let (_tx, rx) = watch::channel(false);
        store.add("boundary", "value");

        let handle = spawn_reaper(store.clone(), INTERVAL, rx);

        // First sweep runs at exactly one interval; the entry is not older than that.
        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(store.get("boundary").is_some());

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_survives_empty_store() {
        let store = Store::new();
        let (_tx, rx) = watch::channel(false);

        let handle = spawn_reaper(store.clone(), INTERVAL, rx);

        tokio::time::sleep(Duration::from_millis(350)).await;
        assert!(!handle.is_finished(), "Reaper should keep sweeping an empty store");

        store.add("late", "value");
        tokio::time::sleep(Duration::from_millis(250)).await;
        assert!(store.get("late").is_none());

        handle.abort();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_stops_on_shutdown_signal() {
        let store = Store::new();
        let (tx, rx) = watch::channel(false);

        let handle = spawn_reaper(store, INTERVAL, rx);
        tx.send_replace(true);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("Reaper should stop after shutdown")
            .unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_accepts_unrepresentable_interval() {
        let store = Store::new();
        let (tx, rx) = watch::channel(false);
        store.add("forever", "value");

        let handle = spawn_reaper(store.clone(), Duration::from_secs(u64::MAX), rx);

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert!(!handle.is_finished());
        assert!(store.get("forever").is_some());

        tx.send_replace(true);
        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("Reaper should stop after shutdown")
            .unwrap();
    }

    #[test]
    fn test_next_deadline_clamps_huge_interval() {
        let before = Instant::now();

        let deadline = next_deadline(Duration::from_secs(u64::MAX));

        assert!(deadline > before + Duration::from_secs(86_400));
        assert!(next_deadline(Duration::ZERO).saturating_duration_since(before) < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reaper_stops_when_sender_dropped() {
        let store = Store::new();
        let (tx, rx) = watch::channel(false);

        let handle = spawn_reaper(store, INTERVAL, rx);
        drop(tx);

        tokio::time::timeout(Duration::from_secs(1), handle)
            .await
            .expect("Reaper should stop once its sender is gone")
            .unwrap();
    }
}
