//! `pokedex browse` command - Interactive catalog browser
//!
//! Two views, mirroring the catalog root and the detail route: a list view
//! with a search box and mode toggle, and a detail view with previous/next
//! navigation. The visible list is re-derived from the master catalog on
//! every pass through the loop.

use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use miette::{IntoDiagnostic, Result};

use crate::cli::helpers::{load_config, open_source, LOADING};
use crate::cli::render::render_detail;
use crate::cli::GlobalOpts;
use crate::core::catalog::{Catalog, EntitySummary};
use crate::core::client::CatalogSource;
use crate::core::filter::{FilterState, SearchMode};
use crate::core::palette::capitalize;
use crate::core::detail::DetailState;
use crate::core::session::{load_catalog, load_detail, DetailSession};
use crate::core::Config;

#[derive(clap::Args, Debug)]
pub struct BrowseArgs {
    /// Initial search term
    #[arg(long, short = 's')]
    pub search: Option<String>,

    /// Initial search mode
    #[arg(long, short = 'b', default_value = "name")]
    pub by: SearchMode,
}

/// What the list view asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListAction {
    Open(u32),
    Search,
    ToggleMode,
    Clear,
    Quit,
}

/// What the detail view asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailAction {
    Previous,
    Next,
    Back,
}

impl DetailAction {
    fn label(self) -> &'static str {
        match self {
            DetailAction::Previous => "‹ Previous",
            DetailAction::Next => "Next ›",
            DetailAction::Back => "Back to list",
        }
    }
}

/// Menu rows above the entries: search, mode toggle, clear (with a query), quit
fn fixed_rows(has_query: bool) -> usize {
    if has_query {
        4
    } else {
        3
    }
}

/// Map a list view selection to an action
fn list_action(choice: usize, has_query: bool, entries: &[EntitySummary]) -> ListAction {
    let fixed = fixed_rows(has_query);
    match choice {
        0 => ListAction::Search,
        1 => ListAction::ToggleMode,
        2 if has_query => ListAction::Clear,
        i if i == fixed - 1 => ListAction::Quit,
        i => match entries.get(i - fixed).and_then(EntitySummary::id) {
            Some(id) => ListAction::Open(id),
            None => ListAction::Search,
        },
    }
}

/// Navigation offered on a detail page; Previous and Next only once loaded
fn detail_actions(state: &DetailState) -> Vec<DetailAction> {
    let mut actions = Vec::new();
    if state.previous().is_some() {
        actions.push(DetailAction::Previous);
    }
    if state.next().is_some() {
        actions.push(DetailAction::Next);
    }
    actions.push(DetailAction::Back);
    actions
}

/// Run the browse command
pub fn run(args: BrowseArgs, global: &GlobalOpts) -> Result<()> {
    let config = load_config(global);
    let source = open_source(&config)?;
    let theme = ColorfulTheme::default();

    let state = load_catalog(&source, config.limit());
    let Some(catalog) = state.catalog() else {
        println!("{}", LOADING);
        std::process::exit(1);
    };

    let mut filter = FilterState::new(args.search.unwrap_or_default(), args.by);

    loop {
        match list_view(catalog, &filter, &theme)? {
            ListAction::Open(id) => detail_view(&source, &config, id, &theme)?,
            ListAction::Search => {
                filter.query = Input::<String>::with_theme(&theme)
                    .with_prompt(format!("Search by {} [{}]", filter.mode, filter.mode.badge()))
                    .with_initial_text(filter.query.clone())
                    .allow_empty(true)
                    .interact_text()
                    .into_diagnostic()?;
            }
            ListAction::ToggleMode => filter.mode = filter.mode.toggled(),
            ListAction::Clear => filter.clear(),
            ListAction::Quit => return Ok(()),
        }
    }
}

fn list_view(catalog: &Catalog, filter: &FilterState, theme: &ColorfulTheme) -> Result<ListAction> {
    let entries = catalog.view(filter);

    let mut items = vec![
        format!("Search [{}] {}", filter.mode.badge(), style(&filter.query).yellow()),
        format!("Search by {} instead", filter.mode.toggled()),
    ];
    let has_query = !filter.query.is_empty();
    if has_query {
        items.push("Clear search ✕".to_string());
    }
    items.push("Quit".to_string());
    let fixed = fixed_rows(has_query);
    debug_assert_eq!(items.len(), fixed);

    for entry in &entries {
        items.push(format!("{:<6} {}", entry.display_id(), capitalize(&entry.name)));
    }

    let prompt = if entries.is_empty() {
        "No entries match".to_string()
    } else {
        format!("Pokédex ({} shown)", entries.len())
    };

    let choice = Select::with_theme(theme)
        .with_prompt(prompt)
        .items(&items)
        .default(if entries.is_empty() { 0 } else { fixed })
        .interact()
        .into_diagnostic()?;

    Ok(list_action(choice, has_query, &entries))
}

fn detail_view(
    source: &dyn CatalogSource,
    config: &Config,
    id: u32,
    theme: &ColorfulTheme,
) -> Result<()> {
    let mut session = DetailSession::new(id);
    session.reload(source, config.language());

    loop {
        let state = session.state();
        println!();
        println!("{}", render_detail(state, config));
        println!();

        let actions = detail_actions(state);
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();

        let default = actions
            .iter()
            .position(|a| *a == DetailAction::Next)
            .unwrap_or(0);
        let choice = Select::with_theme(theme)
            .items(&labels)
            .default(default)
            .interact()
            .into_diagnostic()?;

        let ticket = match actions[choice] {
            DetailAction::Previous => session.previous(),
            DetailAction::Next => session.next(),
            DetailAction::Back => return Ok(()),
        };

        if let Some(ticket) = ticket {
            let loaded = load_detail(source, ticket.id, config.language());
            session.commit(ticket, loaded);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detail::EntityDetail;

    fn entries() -> Vec<EntitySummary> {
        vec![
            EntitySummary::new("bulbasaur", "https://pokeapi.co/api/v2/pokemon/1/"),
            EntitySummary::new("ivysaur", "https://pokeapi.co/api/v2/pokemon/2/"),
        ]
    }

    fn loaded(id: u32) -> DetailState {
        let detail = EntityDetail {
            id,
            name: "bulbasaur".to_string(),
            categories: vec!["grass".to_string()],
            height_units: 7,
            weight_units: 69,
            abilities: Vec::new(),
            stats: Vec::new(),
            default_sprite_ref: None,
        };
        DetailState::settle(detail, None)
    }

    #[test]
    fn test_list_action_without_query() {
        let entries = entries();
        assert_eq!(list_action(0, false, &entries), ListAction::Search);
        assert_eq!(list_action(1, false, &entries), ListAction::ToggleMode);
        assert_eq!(list_action(2, false, &entries), ListAction::Quit);
        assert_eq!(list_action(3, false, &entries), ListAction::Open(1));
        assert_eq!(list_action(4, false, &entries), ListAction::Open(2));
    }

    #[test]
    fn test_list_action_with_query_shifts_entries() {
        let entries = entries();
        assert_eq!(list_action(2, true, &entries), ListAction::Clear);
        assert_eq!(list_action(3, true, &entries), ListAction::Quit);
        assert_eq!(list_action(4, true, &entries), ListAction::Open(1));
        assert_eq!(list_action(5, true, &entries), ListAction::Open(2));
    }

    #[test]
    fn test_list_action_empty_list() {
        assert_eq!(list_action(2, true, &[]), ListAction::Clear);
        assert_eq!(list_action(3, true, &[]), ListAction::Quit);
        assert_eq!(list_action(9, true, &[]), ListAction::Search);
    }

    #[test]
    fn test_detail_actions_first_entry_has_no_previous() {
        assert_eq!(
            detail_actions(&loaded(1)),
            vec![DetailAction::Next, DetailAction::Back]
        );
    }

    #[test]
    fn test_detail_actions_middle_entry() {
        let actions = detail_actions(&loaded(25));
        assert_eq!(
            actions,
            vec![DetailAction::Previous, DetailAction::Next, DetailAction::Back]
        );
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        assert_eq!(labels, ["‹ Previous", "Next ›", "Back to list"]);
    }

    #[test]
    fn test_detail_actions_while_loading() {
        assert_eq!(
            detail_actions(&DetailState::Loading { id: 25 }),
            vec![DetailAction::Back]
        );
    }
}
