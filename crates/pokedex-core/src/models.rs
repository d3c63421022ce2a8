//! PokéAPI Models
//!
//! Wire structures for the endpoints the catalog reads, plus the summary
//! record shown on the card grid. Only the fields the UI uses are declared;
//! everything else in the responses is ignored.

use serde::{Deserialize, Serialize};

/// Any `{ name, url }` reference in the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    pub url: String,
}

/// One page of `/pokemon?limit=&offset=`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonPage {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Response of `/type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeList {
    pub results: Vec<NamedResource>,
}

// ========================
// Detail record
// ========================

/// Response of `/pokemon/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDetail {
    pub id: u32,
    pub name: String,
    /// Decimetres
    pub height: u32,
    /// Hectograms
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub stats: Vec<StatEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: OtherSprites,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(rename = "official-artwork", default)]
    pub official_artwork: Artwork,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Artwork {
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

impl PokemonDetail {
    /// Official artwork, falling back to the default front sprite
    pub fn image(&self) -> Option<String> {
        self.sprites
            .other
            .official_artwork
            .front_default
            .clone()
            .or_else(|| self.sprites.front_default.clone())
    }

    /// Type names in slot order
    pub fn type_names(&self) -> Vec<String> {
        let mut slots: Vec<&TypeSlot> = self.types.iter().collect();
        slots.sort_by_key(|t| t.slot);
        slots.into_iter().map(|t| t.kind.name.clone()).collect()
    }

    pub fn primary_type(&self) -> Option<String> {
        self.type_names().into_iter().next()
    }
}

// ========================
// Descriptive record
// ========================

/// Response of `/pokemon-species/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSpecies {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}

// ========================
// Summary record
// ========================

/// Card grid entry, merged from a list entry and its detail record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonSummary {
    pub name: String,
    pub url: String,
    pub id: u32,
    pub image: Option<String>,
    pub types: Vec<String>,
}

impl PokemonSummary {
    pub fn from_detail(resource: &NamedResource, detail: &PokemonDetail) -> Self {
        Self {
            name: resource.name.clone(),
            url: resource.url.clone(),
            id: detail.id,
            image: detail.image(),
            types: detail.type_names(),
        }
    }

    /// Pair each list entry with its detail record, keeping page order
    pub fn merge_page(entries: &[NamedResource], details: &[PokemonDetail]) -> Vec<Self> {
        entries
            .iter()
            .zip(details)
            .map(|(entry, detail)| Self::from_detail(entry, detail))
            .collect()
    }

    pub fn primary_type(&self) -> Option<&str> {
        self.types.first().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BULBASAUR: &str = r#"{
        "id": 1,
        "name": "bulbasaur",
        "height": 7,
        "weight": 69,
        "base_experience": 64,
        "sprites": {
            "front_default": "https://img/front/1.png",
            "other": {
                "official-artwork": { "front_default": "https://img/artwork/1.png" },
                "home": { "front_default": null }
            }
        },
        "types": [
            { "slot": 2, "type": { "name": "poison", "url": "https://pokeapi.co/api/v2/type/4/" } },
            { "slot": 1, "type": { "name": "grass", "url": "https://pokeapi.co/api/v2/type/12/" } }
        ],
        "stats": [
            { "base_stat": 45, "effort": 0, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 65, "effort": 1, "stat": { "name": "special-attack", "url": "https://pokeapi.co/api/v2/stat/4/" } }
        ]
    }"#;

    fn bulbasaur() -> PokemonDetail {
        serde_json::from_str(BULBASAUR).unwrap()
    }

    #[test]
    fn test_detail_parses_and_ignores_unknown_fields() {
        let detail = bulbasaur();
        assert_eq!(detail.id, 1);
        assert_eq!(detail.height, 7);
        assert_eq!(detail.stats.len(), 2);
        assert_eq!(detail.stats[1].stat.name, "special-attack");
    }

    #[test]
    fn test_type_names_follow_slot_order() {
        let detail = bulbasaur();
        assert_eq!(detail.type_names(), vec!["grass", "poison"]);
        assert_eq!(detail.primary_type().as_deref(), Some("grass"));
    }

    #[test]
    fn test_image_prefers_official_artwork() {
        let mut detail = bulbasaur();
        assert_eq!(detail.image().as_deref(), Some("https://img/artwork/1.png"));

        detail.sprites.other.official_artwork.front_default = None;
        assert_eq!(detail.image().as_deref(), Some("https://img/front/1.png"));

        detail.sprites.front_default = None;
        assert_eq!(detail.image(), None);
    }

    #[test]
    fn test_missing_sprites_default_to_empty() {
        let json = r#"{"id": 10, "name": "x", "height": 1, "weight": 1, "types": [], "stats": []}"#;
        let detail: PokemonDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.image(), None);
        assert_eq!(detail.primary_type(), None);
    }

    #[test]
    fn test_summary_from_detail() {
        let resource = NamedResource {
            name: "bulbasaur".to_string(),
            url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
        };
        let summary = PokemonSummary::from_detail(&resource, &bulbasaur());
        assert_eq!(summary.name, "bulbasaur");
        assert_eq!(summary.url, "https://pokeapi.co/api/v2/pokemon/1/");
        assert_eq!(summary.id, 1);
        assert_eq!(summary.image.as_deref(), Some("https://img/artwork/1.png"));
        assert_eq!(summary.types, vec!["grass", "poison"]);
        assert_eq!(summary.primary_type(), Some("grass"));
    }

    #[test]
    fn test_merge_page_keeps_list_order() {
        let mut ivysaur = bulbasaur();
        ivysaur.id = 2;
        ivysaur.name = "ivysaur".to_string();
        ivysaur.sprites.other.official_artwork.front_default = None;
        ivysaur.types.retain(|t| t.kind.name == "grass");

        let entries = vec![
            NamedResource {
                name: "bulbasaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/1/".to_string(),
            },
            NamedResource {
                name: "ivysaur".to_string(),
                url: "https://pokeapi.co/api/v2/pokemon/2/".to_string(),
            },
        ];
        let merged = PokemonSummary::merge_page(&entries, &[bulbasaur(), ivysaur]);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].name, "bulbasaur");
        assert_eq!(merged[0].id, 1);
        assert_eq!(merged[0].image.as_deref(), Some("https://img/artwork/1.png"));
        assert_eq!(merged[0].types, vec!["grass", "poison"]);

        assert_eq!(merged[1].name, "ivysaur");
        assert_eq!(merged[1].url, "https://pokeapi.co/api/v2/pokemon/2/");
        assert_eq!(merged[1].id, 2);
        assert_eq!(merged[1].image.as_deref(), Some("https://img/front/1.png"));
        assert_eq!(merged[1].types, vec!["grass"]);
    }

    #[test]
    fn test_merge_page_names_come_from_the_list() {
        let entry = NamedResource {
            name: "bulbasaur-listed".to_string(),
            url: "https://example.test/pokemon/1/".to_string(),
        };
        let merged = PokemonSummary::merge_page(&[entry], &[bulbasaur()]);
        assert_eq!(merged[0].name, "bulbasaur-listed");
        assert_eq!(merged[0].url, "https://example.test/pokemon/1/");
        assert!(PokemonSummary::merge_page(&[], &[]).is_empty());
    }

    #[test]
    fn test_page_parses() {
        let json = r#"{
            "count": 1302,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=20&limit=20",
            "previous": null,
            "results": [
                { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" },
                { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" }
            ]
        }"#;
        let page: PokemonPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.count, 1302);
        assert!(page.previous.is_none());
        assert_eq!(page.results[1].name, "ivysaur");
    }

    #[test]
    fn test_species_without_entries() {
        let json = r#"{"id": 1, "name": "bulbasaur"}"#;
        let species: PokemonSpecies = serde_json::from_str(json).unwrap();
        assert!(species.flavor_text_entries.is_empty());
    }
}
