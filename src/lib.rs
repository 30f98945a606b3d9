//! Pokedex - a PokeAPI REPL backed by an expiring response cache
//!
//! The core is [`cache::Cache`], a thread-safe byte cache whose entries are
//! swept away by a background reaper. The client, Pokedex and REPL modules
//! consume it cache-aside.

pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pokedex;
pub mod repl;
pub mod tasks;

pub use cache::Cache;
pub use client::PokeApiClient;
pub use config::Config;
pub use error::{PokedexError, Result};
pub use repl::Session;
pub use tasks::spawn_reaper;
