//! Fetchers and per-view state
//!
//! Fetch failures are logged and never surfaced: the catalog stays
//! `Loading`, a detail view stays `Loading`, and a missing description just
//! drops that section.
//!
//! Detail loads are tagged with a generation number. Only the response for
//! the most recent navigation is committed; anything older is discarded.

use tracing::{debug, error, info, warn};

use crate::core::catalog::{Catalog, CatalogState};
use crate::core::client::CatalogSource;
use crate::core::detail::DetailState;

/// Fetch the catalog page once
///
/// An empty page leaves the list in `Loading`, same as a failed fetch.
pub fn load_catalog(source: &dyn CatalogSource, limit: u32) -> CatalogState {
    match source.list(limit) {
        Ok(page) if page.results.is_empty() => {
            warn!(limit, "Catalog page is empty");
            CatalogState::Loading
        }
        Ok(page) => {
            info!(count = page.results.len(), "Catalog loaded");
            CatalogState::Loaded(Catalog::from(page))
        }
        Err(e) => {
            error!("Error fetching catalog: {}", e);
            CatalogState::Loading
        }
    }
}

/// Fetch attributes, then the description, for one id
pub fn load_detail(source: &dyn CatalogSource, id: u32, language: &str) -> DetailState {
    let detail = match source.entity(id) {
        Ok(detail) => detail,
        Err(e) if e.is_not_found() => {
            warn!(id, "No entry with this id: {}", e);
            return DetailState::Loading { id };
        }
        Err(e) => {
            error!(id, "Error fetching entity details: {}", e);
            return DetailState::Loading { id };
        }
    };

    let description = match source.species(id) {
        Ok(species) => {
            let text = species.description(language);
            if text.is_none() {
                debug!(id, language, "No description in requested language");
            }
            text
        }
        Err(e) => {
            warn!(id, "Error fetching species text: {}", e);
            None
        }
    };

    DetailState::settle(detail, description)
}

/// Handle for one in-flight detail load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    pub id: u32,
    generation: u64,
}

/// Detail view for a sequence of navigations
#[derive(Debug)]
pub struct DetailSession {
    generation: u64,
    state: DetailState,
}

impl DetailSession {
    /// Start a session positioned on `id`, not yet loaded
    pub fn new(id: u32) -> Self {
        Self {
            generation: 0,
            state: DetailState::Loading { id },
        }
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    /// Move to `id`; the view goes back to loading and older tickets go stale
    pub fn navigate(&mut self, id: u32) -> Ticket {
        self.generation += 1;
        self.state = DetailState::Loading { id };
        Ticket {
            id,
            generation: self.generation,
        }
    }

    /// Navigate to `id + 1`; only possible once the current entry has loaded
    pub fn next(&mut self) -> Option<Ticket> {
        let id = self.state.next()?;
        Some(self.navigate(id))
    }

    /// Navigate to `id - 1`; a no-op at id 1 or while loading
    pub fn previous(&mut self) -> Option<Ticket> {
        let id = self.state.previous()?;
        Some(self.navigate(id))
    }

    /// Commit a finished load. Returns false, leaving the view untouched, when
    /// the ticket is not the latest one.
    pub fn commit(&mut self, ticket: Ticket, state: DetailState) -> bool {
        if ticket.generation != self.generation {
            debug!(
                id = ticket.id,
                current = self.state.id(),
                "Discarding stale detail response"
            );
            return false;
        }
        self.state = state;
        true
    }

    /// Navigate to `id`, load it, and commit the result
    pub fn visit(&mut self, source: &dyn CatalogSource, id: u32, language: &str) -> &DetailState {
        let ticket = self.navigate(id);
        let loaded = load_detail(source, ticket.id, language);
        self.commit(ticket, loaded);
        &self.state
    }

    /// Load whatever the current loading state points at
    pub fn reload(&mut self, source: &dyn CatalogSource, language: &str) -> &DetailState {
        let id = self.state.id();
        self.visit(source, id, language)
    }
}
