//! Core module - catalog model, filtering, fetching and presentation lookups

pub mod catalog;
pub mod client;
pub mod config;
pub mod detail;
pub mod filter;
pub mod identity;
pub mod palette;
pub mod session;

pub use catalog::{Catalog, CatalogState, EntitySummary};
pub use client::{ApiError, CatalogSource, HttpSource};
pub use config::{Config, ConfigError};
pub use detail::{DetailState, EntityDetail, SpeciesText};
pub use filter::{filter, FilterState, SearchMode};
pub use identity::{extract_id, format_id};
pub use session::{load_catalog, load_detail, DetailSession};
