//! Entity detail records and the detail view state
//!
//! The API nests every named value one level deep (`types[].type.name`,
//! `stats[].stat.name`, ...). Deserialization goes through the wire shapes
//! below and flattens into [`EntityDetail`].

use serde::{Deserialize, Serialize};

use crate::core::identity::format_id;

/// A single base stat
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Stat {
    pub name: String,
    pub value: u32,
}

/// Full attribute set for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "WireDetail")]
pub struct EntityDetail {
    pub id: u32,
    pub name: String,
    /// Ordered; the first category is the primary one
    pub categories: Vec<String>,
    /// Decimetres
    pub height_units: u32,
    /// Hectograms
    pub weight_units: u32,
    pub abilities: Vec<String>,
    pub stats: Vec<Stat>,
    pub default_sprite_ref: Option<String>,
}

impl EntityDetail {
    pub fn display_id(&self) -> String {
        format_id(self.id)
    }

    pub fn primary_category(&self) -> Option<&str> {
        self.categories.first().map(String::as_str)
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        f64::from(self.weight_units) / 10.0
    }

    /// Height in metres
    pub fn height_m(&self) -> f64 {
        f64::from(self.height_units) / 10.0
    }

    /// Id of the next entry; unbounded, the API decides whether it exists
    pub fn next_id(&self) -> u32 {
        next_id(self.id)
    }

    /// Id of the previous entry, `None` at the start of the catalog
    pub fn previous_id(&self) -> Option<u32> {
        previous_id(self.id)
    }
}

pub fn next_id(id: u32) -> u32 {
    id.saturating_add(1)
}

pub fn previous_id(id: u32) -> Option<u32> {
    if id <= 1 {
        None
    } else {
        Some(id - 1)
    }
}

// Wire shapes

#[derive(Debug, Deserialize)]
struct NamedRef {
    name: String,
}

#[derive(Debug, Deserialize)]
struct WireType {
    #[serde(rename = "type")]
    kind: NamedRef,
}

#[derive(Debug, Deserialize)]
struct WireAbility {
    ability: NamedRef,
}

#[derive(Debug, Deserialize)]
struct WireStat {
    base_stat: u32,
    stat: NamedRef,
}

#[derive(Debug, Default, Deserialize)]
struct WireSprites {
    front_default: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WireDetail {
    id: u32,
    name: String,
    #[serde(default)]
    types: Vec<WireType>,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    weight: u32,
    #[serde(default)]
    abilities: Vec<WireAbility>,
    #[serde(default)]
    stats: Vec<WireStat>,
    #[serde(default)]
    sprites: WireSprites,
}

impl From<WireDetail> for EntityDetail {
    fn from(wire: WireDetail) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            categories: wire.types.into_iter().map(|t| t.kind.name).collect(),
            height_units: wire.height,
            weight_units: wire.weight,
            abilities: wire.abilities.into_iter().map(|a| a.ability.name).collect(),
            stats: wire
                .stats
                .into_iter()
                .map(|s| Stat {
                    name: s.stat.name,
                    value: s.base_stat,
                })
                .collect(),
            default_sprite_ref: wire.sprites.front_default,
        }
    }
}

/// One localized flavor text from the species endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: LanguageRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LanguageRef {
    pub name: String,
}

/// Species record; only the flavor texts are used
#[derive(Debug, Clone, Deserialize)]
pub struct SpeciesText {
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

impl SpeciesText {
    /// First description in the given language, with line and form feeds
    /// replaced by spaces
    pub fn description(&self, language: &str) -> Option<String> {
        self.flavor_text_entries
            .iter()
            .find(|entry| entry.language.name == language)
            .map(|entry| normalize_description(&entry.flavor_text))
    }
}

/// Replace `\n` and form feed characters with single spaces
pub fn normalize_description(text: &str) -> String {
    text.chars()
        .map(|c| if c == '\n' || c == '\x0c' { ' ' } else { c })
        .collect()
}

/// State of the detail view
///
/// `Loading` covers both in-flight and failed primary fetches; the view
/// never leaves it on error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailState {
    Loading { id: u32 },
    Loaded {
        detail: EntityDetail,
        description: String,
    },
    LoadedWithoutDescription { detail: EntityDetail },
}

impl DetailState {
    /// Id this view is showing (or trying to show)
    pub fn id(&self) -> u32 {
        match self {
            DetailState::Loading { id } => *id,
            DetailState::Loaded { detail, .. } => detail.id,
            DetailState::LoadedWithoutDescription { detail } => detail.id,
        }
    }

    pub fn detail(&self) -> Option<&EntityDetail> {
        match self {
            DetailState::Loading { .. } => None,
            DetailState::Loaded { detail, .. } => Some(detail),
            DetailState::LoadedWithoutDescription { detail } => Some(detail),
        }
    }

    pub fn description(&self) -> Option<&str> {
        match self {
            DetailState::Loaded { description, .. } => Some(description),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DetailState::Loading { .. })
    }

    /// Build the settled state from the two fetch outcomes
    pub fn settle(detail: EntityDetail, description: Option<String>) -> Self {
        match description {
            Some(description) => DetailState::Loaded {
                detail,
                description,
            },
            None => DetailState::LoadedWithoutDescription { detail },
        }
    }

    /// Next id to visit; only available once loaded
    pub fn next(&self) -> Option<u32> {
        self.detail().map(EntityDetail::next_id)
    }

    /// Previous id to visit; `None` while loading or at id 1
    pub fn previous(&self) -> Option<u32> {
        self.detail().and_then(EntityDetail::previous_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "id": 25,
        "name": "pikachu",
        "height": 4,
        "weight": 60,
        "types": [{"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}],
        "abilities": [
            {"ability": {"name": "static", "url": ""}, "is_hidden": false},
            {"ability": {"name": "lightning-rod", "url": ""}, "is_hidden": true}
        ],
        "stats": [
            {"base_stat": 35, "effort": 0, "stat": {"name": "hp"}},
            {"base_stat": 55, "effort": 0, "stat": {"name": "attack"}},
            {"base_stat": 90, "effort": 2, "stat": {"name": "speed"}}
        ],
        "sprites": {"front_default": "https://example.test/25.png", "back_default": null}
    }"#;

    fn pikachu() -> EntityDetail {
        serde_json::from_str(PIKACHU).unwrap()
    }

    #[test]
    fn test_detail_flattens_wire_shape() {
        let detail = pikachu();
        assert_eq!(detail.id, 25);
        assert_eq!(detail.categories, vec!["electric"]);
        assert_eq!(detail.abilities, vec!["static", "lightning-rod"]);
        assert_eq!(detail.stats.len(), 3);
        assert_eq!(detail.stats[2], Stat { name: "speed".into(), value: 90 });
        assert_eq!(detail.default_sprite_ref.as_deref(), Some("https://example.test/25.png"));
        assert_eq!(detail.primary_category(), Some("electric"));
        assert_eq!(detail.display_id(), "#025");
    }

    #[test]
    fn test_measurements() {
        let detail = pikachu();
        assert!((detail.weight_kg() - 6.0).abs() < f64::EPSILON);
        assert!((detail.height_m() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn test_navigation() {
        let mut detail = pikachu();
        assert_eq!(detail.next_id(), 26);
        assert_eq!(detail.previous_id(), Some(24));

        detail.id = 1;
        assert_eq!(detail.previous_id(), None);
        assert_eq!(detail.next_id(), 2);
    }

    #[test]
    fn test_description_language_and_normalization() {
        let json = r#"{"flavor_text_entries": [
            {"flavor_text": "Quand plusieurs", "language": {"name": "fr"}},
            {"flavor_text": "When several of\nthese POKéMON\fgather", "language": {"name": "en"}},
            {"flavor_text": "Second english", "language": {"name": "en"}}
        ]}"#;
        let species: SpeciesText = serde_json::from_str(json).unwrap();
        assert_eq!(
            species.description("en").as_deref(),
            Some("When several of these POKéMON gather")
        );
        assert_eq!(species.description("fr").as_deref(), Some("Quand plusieurs"));
        assert_eq!(species.description("ja"), None);
    }

    #[test]
    fn test_species_without_entries() {
        let species: SpeciesText = serde_json::from_str("{}").unwrap();
        assert_eq!(species.description("en"), None);
    }

    #[test]
    fn test_state_transitions() {
        let loading = DetailState::Loading { id: 25 };
        assert!(loading.is_loading());
        assert_eq!(loading.id(), 25);
        assert_eq!(loading.next(), None);
        assert_eq!(loading.previous(), None);

        let loaded = DetailState::settle(pikachu(), Some("Electric mouse".into()));
        assert_eq!(loaded.description(), Some("Electric mouse"));
        assert_eq!(loaded.next(), Some(26));

        let bare = DetailState::settle(pikachu(), None);
        assert!(matches!(bare, DetailState::LoadedWithoutDescription { .. }));
        assert_eq!(bare.description(), None);
        assert_eq!(bare.previous(), Some(24));
    }
}
