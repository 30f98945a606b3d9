//! PokeAPI Client
//!
//! Cache-aside fetching: every request URL is looked up in the cache first,
//! and successful response bodies are stored under that URL on a miss.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon, PokemonResponse};

// == PokeAPI Client ==
/// PokeAPI client sharing one response cache across all requests.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: Arc<Cache>,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client rooted at `base_url` (e.g. `https://pokeapi.co/api/v2`).
    pub fn new(base_url: impl Into<String>, timeout: Duration, cache: Arc<Cache>) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self {
            http,
            base_url,
            cache,
        })
    }

    // == Fetch ==
    /// Returns the body for `url`, from the cache when possible.
    ///
    /// Only 2xx bodies are cached. A 404 maps to [`PokedexError::NotFound`].
    pub async fn fetch(&self, url: &str) -> Result<Bytes> {
        if let Some(body) = self.cache.get(url) {
            debug!("Cache hit for {}", url);
            return Ok(body);
        }
        debug!("Cache miss for {}, fetching", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(PokedexError::NotFound(url.to_string()));
        }
        if !status.is_success() {
            return Err(PokedexError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone());
        Ok(body)
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let body = self.fetch(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Endpoints ==
    /// Lists `limit` location areas starting at `offset`.
    pub async fn location_areas(&self, offset: u32, limit: u32) -> Result<LocationAreaPage> {
        let url = format!(
            "{}/location-area?offset={}&limit={}",
            self.base_url, offset, limit
        );
        self.fetch_json(&url).await
    }

    /// Fetches one location area with its Pokemon encounters.
    pub async fn location_area(&self, name: &str) -> Result<LocationArea> {
        let url = format!("{}/location-area/{}/", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches one Pokemon and maps it into a Pokedex record.
    pub async fn pokemon(&self, name: &str) -> Result<Pokemon> {
        let url = format!("{}/pokemon/{}/", self.base_url, name);
        let response: PokemonResponse = self.fetch_json(&url).await?;
        Ok(response.into())
    }
}
