//! Catalog client: typed access to the backend's read-only lookup endpoints.
//!
//! No retries happen at this layer; retry policy belongs to the caller.

use reqwest::{Client, StatusCode};
use tracing::{debug, warn};

use crate::Result;
use crate::config::DirectoryConfig;
use crate::error::CatalogError;
use crate::models::{City, CityDetail, State};

/// Client for the catalog backend's lookup endpoints.
pub struct CatalogClient {
    client: Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client from validated configuration.
    pub fn new(config: &DirectoryConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("askmycity/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CatalogError::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Fetch all states.
    pub async fn list_states(&self) -> Result<Vec<State>> {
        let url = format!("{}/api/states", self.base_url);
        debug!("fetching state list from {url}");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("state list request failed: {e}");
            CatalogError::network(format!("state list request failed: {e}"))
        })?;

        if !response.status().is_success() {
            warn!("state list request returned {}", response.status());
            return Err(CatalogError::network(format!(
                "state list request returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::decode(format!("failed to parse state list: {e}")))
    }

    /// Fetch the cities of one state.
    ///
    /// A state with no cities yields an empty list, not an error.
    pub async fn list_cities(&self, state_slug: &str) -> Result<Vec<City>> {
        if state_slug.is_empty() {
            return Err(CatalogError::validation("state slug cannot be empty"));
        }

        let url = format!(
            "{}/api/cities?state={}",
            self.base_url,
            urlencoding::encode(state_slug)
        );
        debug!("fetching city list for state '{state_slug}'");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("city list request for '{state_slug}' failed: {e}");
            CatalogError::network(format!("city list request failed: {e}"))
        })?;

        if !response.status().is_success() {
            warn!(
                "city list request for '{state_slug}' returned {}",
                response.status()
            );
            return Err(CatalogError::network(format!(
                "city list request returned {}",
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CatalogError::decode(format!("failed to parse city list: {e}")))
    }

    /// Fetch the full service bundle for one city.
    ///
    /// The backend's 404 is the only signal classified as not-found; any
    /// other non-success status counts as a server failure.
    pub async fn city_detail(&self, city_slug: &str) -> Result<CityDetail> {
        if city_slug.is_empty() {
            return Err(CatalogError::validation("city slug cannot be empty"));
        }

        let url = format!(
            "{}/api/cities/{}",
            self.base_url,
            urlencoding::encode(city_slug)
        );
        debug!("fetching city detail for '{city_slug}'");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("city detail request for '{city_slug}' failed: {e}");
            CatalogError::network(format!("city detail request failed: {e}"))
        })?;

        match response.status() {
            status if status.is_success() => response
                .json()
                .await
                .map_err(|e| CatalogError::decode(format!("failed to parse city detail: {e}"))),
            StatusCode::NOT_FOUND => {
                debug!("backend reported city '{city_slug}' unknown");
                Err(CatalogError::not_found(city_slug))
            }
            status => {
                warn!("city detail request for '{city_slug}' returned {status}");
                Err(CatalogError::network(format!(
                    "city detail request returned {status}"
                )))
            }
        }
    }
}
