//! Data Models Module
//!
//! PokeAPI payload shapes and the domain records built from them.

pub mod location;
pub mod pokemon;

pub use location::{LocationArea, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonResponse, PokemonStat};
