//! Entity identifiers - extraction from locators and display formatting
//!
//! The catalog endpoint never returns numeric ids directly. Each summary
//! carries a locator such as `https://pokeapi.co/api/v2/pokemon/25/` and the
//! id is its second-to-last path segment (the trailing slash leaves an empty
//! last segment).

use std::fmt;

/// Width that display ids are zero-padded to (`#001`)
pub const ID_WIDTH: usize = 3;

/// Extract the identifier segment from a locator
///
/// Returns the second-to-last `/`-delimited segment. Locators without at
/// least two segments yield an empty string, which never matches a
/// non-empty query and never parses as an id.
pub fn extract_id(locator: &str) -> &str {
    let mut parts = locator.rsplit('/');
    match (parts.next(), parts.next()) {
        (Some(_), Some(id)) => id,
        _ => "",
    }
}

/// Format an id for display: `#` followed by the id left-padded with `0` to
/// three characters
///
/// Ids with more than three digits are printed in full (`#1000`), so they
/// no longer line up with the rest of the column.
pub fn format_id<T: fmt::Display>(id: T) -> String {
    format!("#{:0>width$}", id.to_string(), width = ID_WIDTH)
}

/// Parse a numeric entity id from user input
///
/// Accepts `25`, `#25`, `#025` and full locators. Zero is rejected since
/// ids are 1-based.
pub fn parse_id(input: &str) -> Option<u32> {
    let trimmed = input.trim();
    let raw = if trimmed.contains('/') {
        extract_id(trimmed)
    } else {
        trimmed.trim_start_matches('#')
    };
    raw.parse::<u32>().ok().filter(|id| *id >= 1)
}
