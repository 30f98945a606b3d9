//! Background Tasks Module
//!
//! Contains background tasks that run for the lifetime of a cache.
//!
//! # Tasks
//! - Reaper: sweeps stale entries out of a cache store every interval

mod reaper;

pub use reaper::spawn_reaper;
