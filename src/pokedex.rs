//! Pokedex Module
//!
//! The collection of caught Pokemon. A plain sorted mapping: no expiry and
//! no sharing, it lives inside one REPL session.

use std::collections::BTreeMap;

use crate::models::Pokemon;

#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a caught Pokemon, replacing any earlier catch of the same name.
    pub fn insert(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Caught names in alphabetical order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(name: &str, height: u32) -> Pokemon {
        Pokemon {
            name: name.to_string(),
            base_experience: 50,
            height,
            weight: 10,
            stats: Vec::new(),
            types: vec!["normal".to_string()],
        }
    }

    #[test]
    fn test_pokedex_insert_and_get() {
        let mut pokedex = Pokedex::new();
        assert!(pokedex.is_empty());

        pokedex.insert(pokemon("pidgey", 3));

        assert_eq!(pokedex.len(), 1);
        assert_eq!(pokedex.get("pidgey").map(|p| p.height), Some(3));
        assert!(pokedex.get("rattata").is_none());
    }

    #[test]
    fn test_pokedex_recatch_replaces() {
        let mut pokedex = Pokedex::new();

        pokedex.insert(pokemon("pidgey", 3));
        pokedex.insert(pokemon("pidgey", 4));

        assert_eq!(pokedex.len(), 1);
        assert_eq!(pokedex.get("pidgey").map(|p| p.height), Some(4));
    }

    #[test]
    fn test_pokedex_names_sorted() {
        let mut pokedex = Pokedex::new();
        pokedex.insert(pokemon("zubat", 8));
        pokedex.insert(pokemon("abra", 9));

        let names: Vec<&str> = pokedex.names().collect();
        assert_eq!(names, vec!["abra", "zubat"]);
    }
}
