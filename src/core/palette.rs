//! Presentation lookups: category colors and stat labels
//!
//! All tables are constants; nothing is rebuilt per render.

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// `#RRGGBB`
    pub fn hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }

    /// Nearest entry of the xterm 256-color 6x6x6 cube
    pub fn to_ansi256(self) -> u8 {
        fn level(c: u8) -> u8 {
            // Cube levels are 0, 95, 135, 175, 215, 255
            if c < 48 {
                0
            } else if c < 115 {
                1
            } else {
                (c - 35) / 40
            }
        }
        16 + 36 * level(self.0) + 6 * level(self.1) + level(self.2)
    }
}

/// Color used for categories missing from the table
pub const FALLBACK_COLOR: Rgb = Rgb(0x6B, 0x72, 0x80);

/// Category name to accent color
pub const CATEGORY_COLORS: [(&str, Rgb); 18] = [
    ("normal", Rgb(0xA8, 0xA7, 0x7A)),
    ("fire", Rgb(0xEE, 0x81, 0x30)),
    ("water", Rgb(0x63, 0x90, 0xF0)),
    ("electric", Rgb(0xF7, 0xD0, 0x2C)),
    ("grass", Rgb(0x7A, 0xC7, 0x4C)),
    ("ice", Rgb(0x96, 0xD9, 0xD6)),
    ("fighting", Rgb(0xC2, 0x2E, 0x28)),
    ("poison", Rgb(0xA3, 0x3E, 0xA1)),
    ("ground", Rgb(0xE2, 0xBF, 0x65)),
    ("flying", Rgb(0xA9, 0x8F, 0xF3)),
    ("psychic", Rgb(0xF9, 0x55, 0x87)),
    ("bug", Rgb(0xA6, 0xB9, 0x1A)),
    ("rock", Rgb(0xB6, 0xA1, 0x36)),
    ("ghost", Rgb(0x73, 0x57, 0x97)),
    ("dragon", Rgb(0x6F, 0x35, 0xFC)),
    ("dark", Rgb(0x70, 0x57, 0x46)),
    ("steel", Rgb(0xB7, 0xB7, 0xCE)),
    ("fairy", Rgb(0xD6, 0x85, 0xAD)),
];

/// Stat name to short label
pub const STAT_ABBREVIATIONS: [(&str, &str); 6] = [
    ("hp", "HP"),
    ("attack", "ATK"),
    ("defense", "DEF"),
    ("special-attack", "SATK"),
    ("special-defense", "SDEF"),
    ("speed", "SPD"),
];

/// Stat value drawn as a full bar
pub const STAT_BAR_MAX: u32 = 200;

/// Look up a category's color, falling back to gray
pub fn category_color(category: &str) -> Rgb {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, rgb)| *rgb)
        .unwrap_or(FALLBACK_COLOR)
}

/// Short label for a stat; unknown stats are uppercased
pub fn stat_abbreviation(name: &str) -> String {
    STAT_ABBREVIATIONS
        .iter()
        .find(|(full, _)| *full == name)
        .map(|(_, short)| short.to_string())
        .unwrap_or_else(|| name.to_uppercase())
}

/// Bar width as a percentage of [`STAT_BAR_MAX`]
///
/// Values above the maximum give percentages above 100.
pub fn stat_bar_percent(value: u32) -> f64 {
    f64::from(value) / f64::from(STAT_BAR_MAX) * 100.0
}

/// Number of filled cells for a bar `width` cells wide, clamped to the width
pub fn stat_bar_cells(value: u32, width: usize) -> usize {
    let cells = (stat_bar_percent(value) / 100.0 * width as f64).round() as usize;
    cells.min(width)
}

/// Capitalize the first character of a display name
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
