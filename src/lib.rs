//! Pokédex: a terminal catalog viewer
//!
//! Lists the PokeAPI catalog, filters it client-side by name or number, and
//! renders per-entry detail pages with category colors and stat bars.

pub mod cli;
pub mod core;
