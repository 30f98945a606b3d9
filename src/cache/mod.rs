//! Cache Module
//!
//! Provides an in-memory, thread-safe cache of byte payloads whose entries
//! are swept away by a background reaper once they go stale.

mod entry;
mod expiring;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use expiring::Cache;
pub use stats::CacheStats;
pub use store::Store;

// == Public Constants ==
/// Interval used when none is configured
pub const DEFAULT_INTERVAL: std::time::Duration = std::time::Duration::from_secs(5);
