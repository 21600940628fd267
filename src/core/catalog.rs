//! Catalog of entity summaries
//!
//! The summary list is fetched once per session and never modified
//! afterwards. Every filtered view is derived from it on demand.

use serde::{Deserialize, Serialize};

use crate::core::filter::{filter, FilterState};
use crate::core::identity::{extract_id, format_id};

/// Lightweight list item: display name plus the locator of its detail record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySummary {
    pub name: String,
    #[serde(rename = "url")]
    pub locator: String,
}

impl EntitySummary {
    pub fn new(name: impl Into<String>, locator: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            locator: locator.into(),
        }
    }

    /// Raw identifier segment of the locator
    pub fn id_str(&self) -> &str {
        extract_id(&self.locator)
    }

    /// Numeric id, if the locator has the expected shape
    pub fn id(&self) -> Option<u32> {
        self.id_str().parse().ok()
    }

    /// `#NNN` display id
    pub fn display_id(&self) -> String {
        format_id(self.id_str())
    }
}

/// Response body of the list endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogPage {
    pub results: Vec<EntitySummary>,
}

/// The session's master list
///
/// Holds the summaries behind a private field so nothing outside can
/// reorder or drop entries once loaded.
#[derive(Debug, Clone)]
pub struct Catalog {
    entries: Vec<EntitySummary>,
}

impl Catalog {
    pub fn new(entries: Vec<EntitySummary>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[EntitySummary] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Derive the visible subset for the given filter state
    pub fn view(&self, state: &FilterState) -> Vec<EntitySummary> {
        filter(&self.entries, &state.query, state.mode)
    }
}

impl From<CatalogPage> for Catalog {
    fn from(page: CatalogPage) -> Self {
        Self::new(page.results)
    }
}

/// State of the list view
#[derive(Debug, Clone)]
pub enum CatalogState {
    /// Fetch not finished, or failed (failures never leave this state)
    Loading,
    Loaded(Catalog),
}

impl CatalogState {
    pub fn catalog(&self) -> Option<&Catalog> {
        match self {
            CatalogState::Loading => None,
            CatalogState::Loaded(catalog) => Some(catalog),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::SearchMode;

    fn sample() -> Catalog {
        Catalog::new(vec![
            EntitySummary::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
            EntitySummary::new("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/"),
            EntitySummary::new("charmander", "https://pokeapi.co/api/v2/pokemon/4/"),
        ])
    }

    #[test]
    fn test_summary_ids() {
        let s = EntitySummary::new("pikachu", "https://pokeapi.co/api/v2/pokemon/25/");
        assert_eq!(s.id_str(), "25");
        assert_eq!(s.id(), Some(25));
        assert_eq!(s.display_id(), "#025");
    }

    #[test]
    fn test_summary_deserializes_url_field() {
        let json = r#"{"results":[{"name":"mew","url":"https://pokeapi.co/api/v2/pokemon/151/"}]}"#;
        let page: CatalogPage = serde_json::from_str(json).unwrap();
        let catalog = Catalog::from(page);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.entries()[0].id(), Some(151));
    }

    #[test]
    fn test_view_leaves_master_list_untouched() {
        let catalog = sample();
        let state = FilterState::new("saur", SearchMode::Name);
        let view = catalog.view(&state);
        assert_eq!(view.len(), 2);
        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog.entries()[2].name, "charmander");
    }

    #[test]
    fn test_catalog_state() {
        assert!(CatalogState::Loading.catalog().is_none());
        assert!(CatalogState::Loaded(sample()).catalog().is_some());
    }
}
