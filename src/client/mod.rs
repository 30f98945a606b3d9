//! Client Module
//!
//! HTTP access to PokeAPI, fronted by the expiring cache.

mod pokeapi;

pub use pokeapi::PokeApiClient;
