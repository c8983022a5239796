//! Location resolver: turns a city identifier from the current route into a
//! classified outcome for the view layer.
//!
//! Exactly one outcome materializes per identifier. A new identifier
//! supersedes any in-flight request for a previous one through the same
//! generation comparison the selector uses; superseded responses are
//! discarded, not torn down at the transport level.

use tracing::debug;

use crate::catalog::CatalogClient;
use crate::error::CatalogError;
use crate::models::CityDetail;

/// Classified outcome of resolving one city identifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Resolution {
    /// Request in flight; the view shows a loading indicator.
    #[default]
    Pending,
    /// Normal render path.
    Ready(CityDetail),
    /// The backend does not know the slug; the view navigates to the error
    /// route.
    NotFound,
    /// Connectivity or decode failure; the view offers an inline retry.
    TransientError(String),
}

/// Token for an in-flight city-detail request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailRequest {
    generation: u64,
    city_slug: String,
}

impl DetailRequest {
    /// The city the request was issued for.
    #[must_use]
    pub fn city_slug(&self) -> &str {
        &self.city_slug
    }
}

/// Resolver state for the city detail view.
#[derive(Debug, Default)]
pub struct LocationResolver {
    generation: u64,
    current_slug: Option<String>,
    outcome: Resolution,
}

impl LocationResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest materialized outcome.
    #[must_use]
    pub fn outcome(&self) -> &Resolution {
        &self.outcome
    }

    /// The identifier currently being resolved or shown.
    #[must_use]
    pub fn current_slug(&self) -> Option<&str> {
        self.current_slug.as_deref()
    }

    /// Start resolving a city identifier, superseding any in-flight request.
    pub fn begin(&mut self, city_slug: &str) -> DetailRequest {
        self.generation += 1;
        self.current_slug = Some(city_slug.to_string());
        self.outcome = Resolution::Pending;
        DetailRequest {
            generation: self.generation,
            city_slug: city_slug.to_string(),
        }
    }

    /// Feed back a detail response. Only the response for the latest request
    /// is committed. Returns whether it was committed.
    pub fn apply(
        &mut self,
        request: &DetailRequest,
        result: Result<CityDetail, CatalogError>,
    ) -> bool {
        if request.generation != self.generation {
            debug!(
                city = %request.city_slug,
                "discarding superseded city-detail response"
            );
            return false;
        }
        self.outcome = match result {
            Ok(detail) => Resolution::Ready(detail),
            Err(CatalogError::NotFound { .. }) => Resolution::NotFound,
            Err(err) => Resolution::TransientError(err.user_message()),
        };
        true
    }

    /// Re-issue the fetch for the current identifier, the manual retry
    /// affordance after a transient failure.
    pub fn retry(&mut self) -> Option<DetailRequest> {
        let slug = self.current_slug.clone()?;
        Some(self.begin(&slug))
    }

    /// Issue the detail fetch and feed the response straight back.
    pub async fn resolve(&mut self, client: &CatalogClient, city_slug: &str) -> &Resolution {
        let request = self.begin(city_slug);
        let result = client.city_detail(request.city_slug()).await;
        self.apply(&request, result);
        &self.outcome
    }
}
