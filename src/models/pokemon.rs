//! Pokemon payloads and the record kept in the Pokedex.

use serde::Deserialize;

use super::NamedResource;

// == API Payload ==
/// `GET /pokemon/{name}/`, restricted to the fields the Pokedex keeps.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonResponse {
    pub name: String,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<StatSlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StatSlot {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

// == Domain Record ==
/// A caught Pokemon as stored in the Pokedex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub name: String,
    pub base_experience: u32,
    pub height: u32,
    pub weight: u32,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonStat {
    pub name: String,
    pub value: u32,
}

impl From<PokemonResponse> for Pokemon {
    fn from(response: PokemonResponse) -> Self {
        Self {
            name: response.name,
            // Some event forms report a null base experience
            base_experience: response.base_experience.unwrap_or(0),
            height: response.height,
            weight: response.weight,
            stats: response
                .stats
                .into_iter()
                .map(|slot| PokemonStat {
                    name: slot.stat.name,
                    value: slot.base_stat,
                })
                .collect(),
            types: response
                .types
                .into_iter()
                .map(|slot| slot.kind.name)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "name": "pikachu",
        "base_experience": 112,
        "height": 4,
        "weight": 60,
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": "u"}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": "u"}}
        ],
        "types": [
            {"slot": 1, "type": {"name": "electric", "url": "u"}}
        ]
    }"#;

    #[test]
    fn test_pokemon_from_response() {
        let response: PokemonResponse = serde_json::from_str(PIKACHU).unwrap();
        let pokemon = Pokemon::from(response);

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience, 112);
        assert_eq!(pokemon.height, 4);
        assert_eq!(pokemon.weight, 60);
        assert_eq!(
            pokemon.stats,
            vec![
                PokemonStat { name: "hp".to_string(), value: 35 },
                PokemonStat { name: "attack".to_string(), value: 55 },
            ]
        );
        assert_eq!(pokemon.types, vec!["electric".to_string()]);
    }

    #[test]
    fn test_null_base_experience() {
        let response: PokemonResponse =
            serde_json::from_str(r#"{"name": "missingno", "base_experience": null}"#).unwrap();
        let pokemon = Pokemon::from(response);

        assert_eq!(pokemon.base_experience, 0);
        assert!(pokemon.stats.is_empty());
        assert!(pokemon.types.is_empty());
    }
}
