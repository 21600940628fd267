//! Client-side catalog filtering
//!
//! A pure function of the master list, the query and the search mode.
//! Nothing here caches a filtered list, so callers re-derive the view
//! whenever any of the three inputs change.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::catalog::EntitySummary;
use crate::core::identity::{extract_id, format_id};

/// Dimension the query is matched against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Match against the display name
    #[default]
    Name,
    /// Match against the formatted id (`#025`)
    Id,
}

impl SearchMode {
    /// The other mode
    pub fn toggled(self) -> Self {
        match self {
            SearchMode::Name => SearchMode::Id,
            SearchMode::Id => SearchMode::Name,
        }
    }

    /// Single-character badge shown next to the search box
    pub fn badge(self) -> &'static str {
        match self {
            SearchMode::Name => "A",
            SearchMode::Id => "#",
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchMode::Name => write!(f, "name"),
            SearchMode::Id => write!(f, "number"),
        }
    }
}

/// Transient search box state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub mode: SearchMode,
}

impl FilterState {
    pub fn new(query: impl Into<String>, mode: SearchMode) -> Self {
        Self {
            query: query.into(),
            mode,
        }
    }

    /// Reset the query, keeping the mode
    pub fn clear(&mut self) {
        self.query.clear();
    }
}

/// Comparison key of a summary under the given mode, lowercased
///
/// A locator with no id segment has an empty key in number mode rather than
/// `#000`, so it is never hit by a non-empty query.
pub fn comparison_key(entry: &EntitySummary, mode: SearchMode) -> String {
    match mode {
        SearchMode::Name => entry.name.to_lowercase(),
        SearchMode::Id => match extract_id(&entry.locator) {
            "" => String::new(),
            id => format_id(id).to_lowercase(),
        },
    }
}

/// Filter summaries by a case-insensitive substring match
///
/// An empty query returns every entry in its original order. Otherwise the
/// result is the ordered subsequence whose comparison key contains the query.
pub fn filter(all: &[EntitySummary], query: &str, mode: SearchMode) -> Vec<EntitySummary> {
    if query.is_empty() {
        return all.to_vec();
    }

    let needle = query.to_lowercase();
    all.iter()
        .filter(|entry| comparison_key(entry, mode).contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, id: u32) -> EntitySummary {
        EntitySummary::new(name, format!("https://pokeapi.co/api/v2/pokemon/{}/", id))
    }

    fn sample() -> Vec<EntitySummary> {
        vec![
            entry("bulbasaur", 1),
            entry("charmander", 4),
            entry("charmeleon", 5),
            entry("charizard", 6),
            entry("squirtle", 7),
            entry("Pikachu", 25),
            entry("mew", 151),
        ]
    }

    fn names(entries: &[EntitySummary]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_is_identity() {
        let all = sample();
        assert_eq!(filter(&all, "", SearchMode::Name), all);
        assert_eq!(filter(&all, "", SearchMode::Id), all);
    }

    #[test]
    fn test_name_search_preserves_order() {
        let all = sample();
        let result = filter(&all, "char", SearchMode::Name);
        assert_eq!(names(&result), vec!["charmander", "charmeleon", "charizard"]);
    }

    #[test]
    fn test_name_search_case_insensitive() {
        let all = sample();
        assert_eq!(names(&filter(&all, "PIKA", SearchMode::Name)), vec!["Pikachu"]);
        assert_eq!(names(&filter(&all, "pika", SearchMode::Name)), vec!["Pikachu"]);
    }

    #[test]
    fn test_name_search_sound_and_complete() {
        let all = sample();
        for query in ["a", "ar", "saur", "mew", "zzz", "E"] {
            let result = filter(&all, query, SearchMode::Name);
            let needle = query.to_lowercase();
            for e in &all {
                let matches = e.name.to_lowercase().contains(&needle);
                assert_eq!(result.contains(e), matches, "query {query:?} entry {}", e.name);
            }
        }
    }

    #[test]
    fn test_id_search_uses_padded_key() {
        let all = sample();
        assert_eq!(names(&filter(&all, "#00", SearchMode::Id)), vec![
            "bulbasaur",
            "charmander",
            "charmeleon",
            "charizard",
            "squirtle"
        ]);
        assert_eq!(names(&filter(&all, "025", SearchMode::Id)), vec!["Pikachu"]);
        assert_eq!(names(&filter(&all, "15", SearchMode::Id)), vec!["mew"]);
    }

    #[test]
    fn test_id_mode_ignores_names() {
        let all = sample();
        assert!(filter(&all, "char", SearchMode::Id).is_empty());
    }

    #[test]
    fn test_no_match_is_empty() {
        let all = sample();
        assert!(filter(&all, "missingno", SearchMode::Name).is_empty());
    }

    #[test]
    fn test_mode_switch_rederives_from_source() {
        let all = sample();
        let mut state = FilterState::new("1", SearchMode::Name);
        assert!(filter(&all, &state.query, state.mode).is_empty());

        state.mode = state.mode.toggled();
        let by_id = filter(&all, &state.query, state.mode);
        assert_eq!(names(&by_id), vec!["bulbasaur", "mew"]);
        assert_eq!(all.len(), 7);
    }

    #[test]
    fn test_malformed_locator_never_matches() {
        let all = vec![EntitySummary::new("ghost", "nolocator")];
        assert_eq!(comparison_key(&all[0], SearchMode::Id), "");
        for query in ["1", "0", "00", "#", "#0", "#000"] {
            assert!(filter(&all, query, SearchMode::Id).is_empty(), "query {:?}", query);
        }
        assert_eq!(filter(&all, "", SearchMode::Id).len(), 1);
        // name search is unaffected
        assert_eq!(filter(&all, "gho", SearchMode::Name).len(), 1);
    }

    #[test]
    fn test_clear_keeps_mode() {
        let mut state = FilterState::new("pika", SearchMode::Id);
        state.clear();
        assert_eq!(state, FilterState::new("", SearchMode::Id));
    }
}
