//! Location area payloads.

use serde::Deserialize;

/// A name plus the URL of the full resource, as PokeAPI links things.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /location-area?offset=..&limit=..`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// `GET /location-area/{name}/`
#[derive(Debug, Clone, Deserialize)]
pub struct LocationArea {
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

impl LocationArea {
    /// Names of every Pokemon that can be encountered here, in API order.
    pub fn pokemon_names(&self) -> impl Iterator<Item = &str> {
        self.pokemon_encounters
            .iter()
            .map(|encounter| encounter.pokemon.name.as_str())
    }
}
