//! Configuration management with layered hierarchy

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

/// Default API root
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2";

/// Default artwork root; images live at `{artwork_url}/{id}.png`
pub const DEFAULT_ARTWORK_URL: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

/// Size of the catalog page fetched at startup
pub const DEFAULT_LIMIT: u32 = 151;

/// Language tag descriptions are filtered to
pub const DEFAULT_LANGUAGE: &str = "en";

/// Errors reading a config file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Pokedex configuration with layered hierarchy
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root of the read API
    pub api_url: Option<String>,

    /// Root of the official artwork images
    pub artwork_url: Option<String>,

    /// Number of summaries fetched for the catalog
    pub limit: Option<u32>,

    /// Language tag for descriptions
    pub language: Option<String>,

    /// Request timeout; no timeout when unset
    pub timeout_secs: Option<u64>,

    /// Default output format
    pub default_format: Option<String>,
}

impl Config {
    /// Load configuration from all sources, merging in priority order
    pub fn load() -> Self {
        let mut config = Config::default();

        // 1. Built-in defaults (applied by the accessors)

        // 2. Global user config (~/.config/pokedex/config.yaml)
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                match Self::from_file(&global_path) {
                    Ok(global) => config.merge(global),
                    Err(e) => warn!("{}", e),
                }
            }
        }

        // 3. Environment variables
        config.merge(Self::from_env(|key| std::env::var(key).ok()));

        config
    }

    /// Read a single YAML config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_yml::from_str::<Config>(&contents).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Build the environment layer using the given variable lookup
    pub fn from_env(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();
        if let Some(url) = lookup("POKEDEX_API_URL") {
            config.api_url = Some(url);
        }
        if let Some(limit) = lookup("POKEDEX_LIMIT") {
            match limit.parse() {
                Ok(n) => config.limit = Some(n),
                Err(_) => warn!("Ignoring POKEDEX_LIMIT={:?}: not a number", limit),
            }
        }
        if let Some(language) = lookup("POKEDEX_LANGUAGE") {
            config.language = Some(language);
        }
        config
    }

    /// Get the path to the global config file
    pub fn global_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "pokedex")
            .map(|dirs| dirs.config_dir().join("config.yaml"))
    }

    /// Merge another config into this one (other takes precedence)
    pub fn merge(&mut self, other: Config) {
        if other.api_url.is_some() {
            self.api_url = other.api_url;
        }
        if other.artwork_url.is_some() {
            self.artwork_url = other.artwork_url;
        }
        if other.limit.is_some() {
            self.limit = other.limit;
        }
        if other.language.is_some() {
            self.language = other.language;
        }
        if other.timeout_secs.is_some() {
            self.timeout_secs = other.timeout_secs;
        }
        if other.default_format.is_some() {
            self.default_format = other.default_format;
        }
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn artwork_url(&self) -> &str {
        self.artwork_url.as_deref().unwrap_or(DEFAULT_ARTWORK_URL)
    }

    pub fn limit(&self) -> u32 {
        self.limit.unwrap_or(DEFAULT_LIMIT)
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Official artwork URL for an id
    pub fn artwork_for(&self, id: u32) -> String {
        format!("{}/{}.png", self.artwork_url().trim_end_matches('/'), id)
    }
}
