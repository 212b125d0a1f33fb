//! # Public catalog entities
//!
//! Read-only shapes returned by the public Pokémon data API, trimmed to the
//! fields the views render. Optional sections default to empty so a sparse
//! record still decodes and the view shows placeholders instead of failing.

use serde::{Deserialize, Serialize};

const NO_DESCRIPTION: &str = "No description available.";

/// `{name, url}` reference to another resource.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /pokemon?limit=&offset=`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PokemonPage {
    pub count: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub results: Vec<NamedResource>,
}

/// Base record from `GET /pokemon/{idOrName}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub base_experience: Option<u32>,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub stats: Vec<BaseStat>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Option<Artwork>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BaseStat {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub kind: NamedResource,
}

/// Species record from `GET /pokemon-species/{idOrName}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorText>,
    #[serde(default)]
    pub evolution_chain: Option<ChainReference>,
    #[serde(default)]
    pub genera: Vec<Genus>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlavorText {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version: Option<NamedResource>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainReference {
    pub url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Genus {
    pub genus: String,
    pub language: NamedResource,
}

/// Evolution chain from the URL referenced by a species record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvolutionChain {
    pub id: u32,
    pub chain: ChainLink,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub species: NamedResource,
    #[serde(default)]
    pub evolves_to: Vec<ChainLink>,
}

/// One stage of a flattened evolution line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvolutionStage {
    pub name: String,
    pub id: Option<u32>,
}

/// Trailing numeric path segment of a resource URL
/// (`".../pokemon-species/25/"` → `25`).
pub fn id_from_url(url: &str) -> Option<u32> {
    url.split('/').filter(|s| !s.is_empty()).last()?.parse().ok()
}

/// `#001`-style catalog number.
pub fn formatted_id(id: u32) -> String {
    format!("#{id:03}")
}

/// Human-readable resource name (`"mr-mime"` → `"mr mime"`).
pub fn display_name(name: &str) -> String {
    name.replace('-', " ")
}

/// Short label for a catalog stat name.
pub fn stat_label(stat: &str) -> String {
    match stat {
        "hp" => "HP".to_string(),
        "attack" => "Attack".to_string(),
        "defense" => "Defense".to_string(),
        "special-attack" => "Sp. Atk".to_string(),
        "special-defense" => "Sp. Def".to_string(),
        "speed" => "Speed".to_string(),
        other => {
            let mut chars = other.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        }
    }
}

impl Pokemon {
    pub fn type_names(&self) -> Vec<&str> {
        self.types.iter().map(|t| t.kind.name.as_str()).collect()
    }

    /// Official artwork when available, else the default sprite.
    pub fn artwork(&self) -> Option<&str> {
        self.sprites
            .other
            .as_ref()
            .and_then(|o| o.official_artwork.as_ref())
            .and_then(|a| a.front_default.as_deref())
            .or(self.sprites.front_default.as_deref())
    }

    pub fn height_m(&self) -> f32 {
        self.height as f32 / 10.0
    }

    pub fn weight_kg(&self) -> f32 {
        self.weight as f32 / 10.0
    }
}

impl PokemonSpecies {
    /// First English flavor text with form feeds flattened, or a placeholder.
    pub fn english_description(&self) -> String {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == "en")
            .map(|entry| entry.flavor_text.replace(['\u{c}', '\n'], " "))
            .unwrap_or_else(|| NO_DESCRIPTION.to_string())
    }

    pub fn english_genus(&self) -> Option<&str> {
        self.genera
            .iter()
            .find(|g| g.language.name == "en")
            .map(|g| g.genus.as_str())
    }

    /// Evolution chain URL, if the species supplies a usable one.
    pub fn evolution_chain_url(&self) -> Option<&str> {
        self.evolution_chain
            .as_ref()
            .map(|c| c.url.as_str())
            .filter(|url| !url.is_empty())
    }
}

/// Placeholder used when no species data is available.
pub fn missing_description() -> &'static str {
    NO_DESCRIPTION
}

/// Upper bound of a single base stat, used to scale stat bars.
pub const MAX_BASE_STAT: u32 = 255;

/// Small front sprite for a catalog number.
pub fn sprite_url(id: u32) -> String {
    format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png")
}

/// Rating bucket for a base stat value.
pub fn stat_tier(value: u32) -> &'static str {
    match value {
        0..=49 => "low",
        50..=89 => "fair",
        90..=119 => "good",
        120..=149 => "great",
        _ => "top",
    }
}

impl EvolutionChain {
    /// Base form followed by the first branch of up to two evolutions.
    pub fn stages(&self) -> Vec<EvolutionStage> {
        let mut stages = Vec::new();
        let mut link = Some(&self.chain);
        while let Some(current) = link {
            stages.push(EvolutionStage {
                name: current.species.name.clone(),
                id: id_from_url(&current.species.url),
            });
            if stages.len() == 3 {
                break;
            }
            link = current.evolves_to.first();
        }
        stages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(name: &str, url: &str) -> NamedResource {
        NamedResource {
            name: name.to_string(),
            url: url.to_string(),
        }
    }

    #[test]
    fn test_id_from_url() {
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25/"), Some(25));
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/25"), Some(25));
        assert_eq!(id_from_url("https://pokeapi.co/api/v2/pokemon/"), None);
        assert_eq!(id_from_url(""), None);
    }

    #[test]
    fn test_stat_tiers() {
        assert_eq!(stat_tier(45), "low");
        assert_eq!(stat_tier(50), "fair");
        assert_eq!(stat_tier(119), "good");
        assert_eq!(stat_tier(150), "top");
        assert_eq!(sprite_url(25), "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png");
    }

    #[test]
    fn test_labels() {
        assert_eq!(formatted_id(7), "#007");
        assert_eq!(formatted_id(1025), "#1025");
        assert_eq!(display_name("mr-mime"), "mr mime");
        assert_eq!(stat_label("special-attack"), "Sp. Atk");
        assert_eq!(stat_label("accuracy"), "Accuracy");
    }

    #[test]
    fn test_sparse_pokemon_decodes() {
        let p: Pokemon = serde_json::from_str(r#"{"id": 25, "name": "pikachu"}"#).unwrap();
        assert!(p.types.is_empty());
        assert!(p.artwork().is_none());
    }

    #[test]
    fn test_artwork_prefers_official() {
        let p: Pokemon = serde_json::from_str(
            r#"{"id": 1, "name": "bulbasaur", "height": 7, "weight": 69,
                "sprites": {"front_default": "small.png",
                            "other": {"official-artwork": {"front_default": "big.png"}}},
                "types": [{"slot": 1, "type": {"name": "grass", "url": ""}}]}"#,
        )
        .unwrap();
        assert_eq!(p.artwork(), Some("big.png"));
        assert_eq!(p.type_names(), vec!["grass"]);
        assert!((p.height_m() - 0.7).abs() < f32::EPSILON);
    }

    #[test]
    fn test_english_description() {
        let species = PokemonSpecies {
            id: 25,
            name: "pikachu".to_string(),
            flavor_text_entries: vec![
                FlavorText {
                    flavor_text: "Quand plusieurs".to_string(),
                    language: resource("fr", ""),
                    version: None,
                },
                FlavorText {
                    flavor_text: "When several of\u{c}these".to_string(),
                    language: resource("en", ""),
                    version: None,
                },
            ],
            evolution_chain: None,
            genera: Vec::new(),
        };
        assert_eq!(species.english_description(), "When several of these");
        assert!(species.evolution_chain_url().is_none());

        let empty = PokemonSpecies {
            flavor_text_entries: Vec::new(),
            ..species
        };
        assert_eq!(empty.english_description(), missing_description());
    }

    #[test]
    fn test_evolution_stages() {
        let chain: EvolutionChain = serde_json::from_str(
            r#"{"id": 1, "chain": {
                "species": {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"},
                "evolves_to": [{
                    "species": {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon-species/2/"},
                    "evolves_to": [{
                        "species": {"name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon-species/3/"},
                        "evolves_to": []
                    }]
                }]
            }}"#,
        )
        .unwrap();
        let stages = chain.stages();
        assert_eq!(stages.len(), 3);
        assert_eq!(stages[0].name, "bulbasaur");
        assert_eq!(stages[2].id, Some(3));
    }
}
