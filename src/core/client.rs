//! Remote API access
//!
//! [`CatalogSource`] is the seam between the views and the transport. The
//! HTTP implementation talks to the PokeAPI over a blocking `reqwest` client;
//! tests plug in their own sources.

use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

use crate::core::catalog::CatalogPage;
use crate::core::config::Config;
use crate::core::detail::{EntityDetail, SpeciesText};

/// Errors that can occur while talking to the remote API
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Could not decode response from {url}: {message}")]
    Decode { url: String, message: String },

    #[error("Could not build HTTP client: {0}")]
    Client(String),
}

impl ApiError {
    /// The API answered with 404
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

/// Read-only source of catalog data
pub trait CatalogSource {
    /// Fetch the first `limit` summaries
    fn list(&self, limit: u32) -> Result<CatalogPage, ApiError>;

    /// Fetch the attributes of one entity
    fn entity(&self, id: u32) -> Result<EntityDetail, ApiError>;

    /// Fetch the species record holding the descriptions
    fn species(&self, id: u32) -> Result<SpeciesText, ApiError>;
}

/// HTTP implementation of [`CatalogSource`]
#[derive(Debug)]
pub struct HttpSource {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl HttpSource {
    /// Build a client for the given base URL (e.g. `https://pokeapi.co/api/v2`)
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, ApiError> {
        // Passing None also clears the blocking client's 30s default
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::Client(e.to_string()))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(config.api_url(), config.timeout())
    }

    /// GET + status check + JSON decode
    fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "GET");

        let response = self.client.get(&url).send().map_err(|e| ApiError::Transport {
            url: url.clone(),
            message: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        response.json::<T>().map_err(|e| ApiError::Decode {
            url,
            message: e.to_string(),
        })
    }
}

impl CatalogSource for HttpSource {
    fn list(&self, limit: u32) -> Result<CatalogPage, ApiError> {
        self.get_json(&format!("pokemon?limit={}", limit))
    }

    fn entity(&self, id: u32) -> Result<EntityDetail, ApiError> {
        self.get_json(&format!("pokemon/{}", id))
    }

    fn species(&self, id: u32) -> Result<SpeciesText, ApiError> {
        self.get_json(&format!("pokemon-species/{}", id))
    }
}
