//! PokeAPI client
//!
//! Fetches location area listings, individual areas and pokemon records
//! from PokeAPI. Every fetch goes through the shared response cache, keyed
//! by the full request URL: a hit returns the stored body, a miss performs
//! the GET and stores the raw body back before decoding.

use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use crate::cache::ResponseCache;
use crate::data::{LocationArea, Pokemon, ResourceList};

/// Base URL for PokeAPI v2
const POKEAPI_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Errors that can occur when fetching data from PokeAPI
#[derive(Debug, Error)]
pub enum PokeapiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The API answered with a non-success status
    #[error("unexpected status {status} from {url}")]
    BadStatus {
        status: reqwest::StatusCode,
        url: String,
    },

    /// Failed to parse API response
    #[error("failed to parse API response: {0}")]
    ParseError(#[from] serde_json::Error),
}

/// Client for fetching data from PokeAPI
#[derive(Debug, Clone)]
pub struct PokeapiClient {
    /// HTTP client for making requests
    http_client: Client,
    /// Shared cache of raw response bodies
    cache: ResponseCache,
    /// Base URL for the API (allows override for testing)
    base_url: String,
}

impl PokeapiClient {
    /// Creates a new PokeapiClient backed by the given response cache
    pub fn new(cache: ResponseCache) -> Self {
        Self {
            http_client: Client::new(),
            cache,
            base_url: POKEAPI_BASE_URL.to_string(),
        }
    }

    /// Creates a new PokeapiClient with a custom base URL (for testing)
    #[allow(dead_code)]
    pub fn with_base_url(cache: ResponseCache, base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            cache,
            base_url: base_url.into(),
        }
    }

    /// URL of the first page of the location area listing
    pub fn location_areas_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    /// Fetches one page of the location area listing.
    ///
    /// `url` is either [`location_areas_url`](Self::location_areas_url) or a
    /// `next`/`previous` cursor reported by a previously fetched page.
    pub async fn fetch_location_areas(&self, url: &str) -> Result<ResourceList, PokeapiError> {
        let body = self.fetch_raw(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a single location area by name
    pub async fn fetch_location_area(&self, name: &str) -> Result<LocationArea, PokeapiError> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        let body = self.fetch_raw(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches a full pokemon record by name
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon, PokeapiError> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        let body = self.fetch_raw(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Returns the raw response body for `url`, consulting the cache first.
    ///
    /// On a miss the body is fetched and stored back under the full URL
    /// before being returned, so repeated requests within the cache TTL
    /// never touch the network.
    async fn fetch_raw(&self, url: &str) -> Result<Vec<u8>, PokeapiError> {
        if let Some(body) = self.cache.get(url) {
            debug!("cache hit for {}", url);
            return Ok(body);
        }

        debug!("fetching {}", url);
        let response = self.http_client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(PokeapiError::BadStatus {
                status,
                url: url.to_string(),
            });
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone());
        Ok(body)
    }
}
