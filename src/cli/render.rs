//! Terminal rendering for catalog rows and detail pages
//!
//! Renderers build strings instead of printing so the browse loop and the
//! one-shot commands share them.

use console::style;
use serde::Serialize;

use crate::cli::helpers::{truncate_str, LOADING};
use crate::core::catalog::EntitySummary;
use crate::core::detail::{DetailState, EntityDetail};
use crate::core::palette::{
    capitalize, category_color, stat_abbreviation, stat_bar_cells, stat_bar_percent, Rgb,
    FALLBACK_COLOR,
};
use crate::core::Config;

/// Width of the drawn stat bars, in cells
const BAR_WIDTH: usize = 30;

/// Width of separator rules
const RULE_WIDTH: usize = 60;

/// Accent color of a detail page: its primary category's color
pub fn accent(detail: &EntityDetail) -> Rgb {
    detail
        .primary_category()
        .map(category_color)
        .unwrap_or(FALLBACK_COLOR)
}

/// One catalog row: number, name, detail route
pub fn summary_row(entry: &EntitySummary) -> String {
    format!(
        "{:<7} {:<16} {}",
        style(entry.display_id()).dim(),
        truncate_str(&capitalize(&entry.name), 16),
        style(format!("pokedex show {}", entry.id_str())).cyan()
    )
}

/// Header line of the catalog table
pub fn summary_header() -> String {
    format!(
        "{:<7} {:<16} {}",
        style("NUMBER").bold(),
        style("NAME").bold(),
        style("DETAIL").bold()
    )
}

/// Colored category badge
fn badge(category: &str) -> String {
    let color = category_color(category).to_ansi256();
    style(format!(" {} ", capitalize(category)))
        .on_color256(color)
        .white()
        .bold()
        .to_string()
}

/// Render the detail view; a loading view renders as the placeholder
pub fn render_detail(state: &DetailState, config: &Config) -> String {
    let Some(detail) = state.detail() else {
        return LOADING.to_string();
    };

    let accent = accent(detail).to_ansi256();
    let rule = style("─".repeat(RULE_WIDTH)).dim().to_string();
    let mut out = Vec::new();

    let name = capitalize(&detail.name);
    let pad = RULE_WIDTH.saturating_sub(name.chars().count() + detail.display_id().len());
    out.push(rule.clone());
    out.push(format!(
        "{}{}{}",
        style(&name).color256(accent).bold(),
        " ".repeat(pad),
        style(detail.display_id()).dim()
    ));
    out.push(rule.clone());

    let badges: Vec<String> = detail.categories.iter().map(|c| badge(c)).collect();
    out.push(badges.join(" "));

    // About
    out.push(String::new());
    out.push(style("About").color256(accent).bold().to_string());
    out.push(format!(
        "  {}: {} kg    {}: {} m",
        style("Weight").dim(),
        detail.weight_kg(),
        style("Height").dim(),
        detail.height_m()
    ));
    if !detail.abilities.is_empty() {
        out.push(format!(
            "  {}: {}",
            style("Abilities").dim(),
            detail.abilities.join(", ")
        ));
    }
    if let Some(description) = state.description() {
        out.push(String::new());
        out.push(format!("  {}", description));
    }

    // Base stats
    if !detail.stats.is_empty() {
        out.push(String::new());
        out.push(style("Base Stats").color256(accent).bold().to_string());
        for stat in &detail.stats {
            let filled = stat_bar_cells(stat.value, BAR_WIDTH);
            out.push(format!(
                "  {:>5} {:>4}  {}{}  {}",
                style(stat_abbreviation(&stat.name)).color256(accent).bold(),
                stat.value,
                style("█".repeat(filled)).color256(accent),
                style("░".repeat(BAR_WIDTH - filled)).dim(),
                style(format!("{:.1}%", stat_bar_percent(stat.value))).dim()
            ));
        }
    }

    // Images
    out.push(String::new());
    out.push(format!(
        "  {}: {}",
        style("Artwork").dim(),
        config.artwork_for(detail.id)
    ));
    if let Some(ref sprite) = detail.default_sprite_ref {
        out.push(format!("  {}: {}", style("Sprite").dim(), sprite));
    }

    // Navigation
    out.push(rule);
    let previous = match detail.previous_id() {
        Some(id) => format!("‹ pokedex show {}", id),
        None => "‹ -".to_string(),
    };
    out.push(format!(
        "{}    {}",
        style(previous).cyan(),
        style(format!("pokedex show {} ›", detail.next_id())).cyan()
    ));

    out.join("\n")
}

/// Machine-readable detail record
#[derive(Debug, Serialize)]
pub struct DetailRecord<'a> {
    #[serde(flatten)]
    pub detail: &'a EntityDetail,
    pub number: String,
    pub color: String,
    pub artwork: String,
    pub description: Option<&'a str>,
    pub previous: Option<u32>,
    pub next: u32,
}

impl<'a> DetailRecord<'a> {
    pub fn new(detail: &'a EntityDetail, description: Option<&'a str>, config: &Config) -> Self {
        Self {
            detail,
            number: detail.display_id(),
            color: accent(detail).hex(),
            artwork: config.artwork_for(detail.id),
            description,
            previous: detail.previous_id(),
            next: detail.next_id(),
        }
    }
}

/// Machine-readable catalog row
#[derive(Debug, Serialize)]
pub struct SummaryRecord<'a> {
    pub id: Option<u32>,
    pub number: String,
    pub name: &'a str,
    pub url: &'a str,
}

impl<'a> From<&'a EntitySummary> for SummaryRecord<'a> {
    fn from(entry: &'a EntitySummary) -> Self {
        Self {
            id: entry.id(),
            number: entry.display_id(),
            name: &entry.name,
            url: &entry.locator,
        }
    }
}
