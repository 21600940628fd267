//! Shared helper functions for CLI commands
//!
//! This module contains utility functions that are used across multiple
//! command modules to avoid code duplication.

use clap::ValueEnum;
use tracing::warn;

use crate::cli::{GlobalOpts, OutputFormat};
use crate::core::client::HttpSource;
use crate::core::Config;

/// Load the layered config and apply command-line overrides
pub fn load_config(global: &GlobalOpts) -> Config {
    let mut config = Config::load();
    if let Some(ref url) = global.api_url {
        config.api_url = Some(url.clone());
    }
    config
}

/// Build the HTTP source for the effective config
pub fn open_source(config: &Config) -> miette::Result<HttpSource> {
    HttpSource::from_config(config).map_err(|e| miette::miette!("{}", e))
}

/// Resolve `--format auto` against the configured default, then the
/// command's own default
pub fn resolve_format(global: &GlobalOpts, config: &Config, fallback: OutputFormat) -> OutputFormat {
    if global.format != OutputFormat::Auto {
        return global.format;
    }

    match config.default_format.as_deref() {
        Some(name) => match OutputFormat::from_str(name, true) {
            Ok(OutputFormat::Auto) => fallback,
            Ok(format) => format,
            Err(_) => {
                warn!("Ignoring unknown default_format {:?}", name);
                fallback
            }
        },
        None => fallback,
    }
}

/// Truncate a string to max_len characters, adding "..." if truncated
///
/// Useful for table columns that need fixed-width output.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Placeholder printed by a view that never finished loading
pub const LOADING: &str = "Loading...";

#[cfg(test)]
mod tests {
    use super::*;

    fn global(format: OutputFormat) -> GlobalOpts {
        GlobalOpts {
            format,
            quiet: false,
            verbose: false,
            api_url: None,
        }
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("hello", 10), "hello");
        assert_eq!(truncate_str("hello world", 8), "hello...");
        assert_eq!(truncate_str("hi", 2), "hi");
        assert_eq!(truncate_str("pokémon trainer", 8), "pokém...");
    }

    #[test]
    fn test_resolve_format_explicit_wins() {
        let config = Config {
            default_format: Some("json".into()),
            ..Default::default()
        };
        let format = resolve_format(&global(OutputFormat::Csv), &config, OutputFormat::Tsv);
        assert_eq!(format, OutputFormat::Csv);
    }

    #[test]
    fn test_resolve_format_config_default() {
        let config = Config {
            default_format: Some("JSON".into()),
            ..Default::default()
        };
        let format = resolve_format(&global(OutputFormat::Auto), &config, OutputFormat::Tsv);
        assert_eq!(format, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_format_fallback() {
        let config = Config {
            default_format: Some("nonsense".into()),
            ..Default::default()
        };
        let format = resolve_format(&global(OutputFormat::Auto), &config, OutputFormat::Tsv);
        assert_eq!(format, OutputFormat::Tsv);
        let format = resolve_format(&global(OutputFormat::Auto), &Config::default(), OutputFormat::Yaml);
        assert_eq!(format, OutputFormat::Yaml);
    }
}
