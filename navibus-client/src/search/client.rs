//! Route search with per-route fare enrichment.

use std::future::Future;

use futures::future::join_all;
use tracing::{debug, info, warn};

use crate::backend::{BackendError, GENERIC_FAILURE};
use crate::domain::{EnrichedRoute, Fare, MissingStop, RouteCandidate, RouteNumber, Stop};

use super::rank::rank_by_fare;

/// Error from a route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Start or end stop was not supplied
    #[error("missing input: please enter both stops")]
    Validation(#[from] MissingStop),

    /// The route search request failed
    #[error("{message}")]
    Search { message: String },
}

impl From<BackendError> for SearchError {
    fn from(err: BackendError) -> Self {
        let message = match err {
            BackendError::Status { message, .. } => message,
            BackendError::Http(e) => e.to_string(),
            BackendError::Json { .. } => GENERIC_FAILURE.to_string(),
        };
        SearchError::Search { message }
    }
}

/// Remote collaborator that knows the bus network.
///
/// This abstraction allows the search client to be tested without HTTP.
pub trait RouteBackend: Send + Sync {
    /// Find routes that pass through `start` and later `end`.
    fn search(
        &self,
        start: &Stop,
        end: &Stop,
    ) -> impl Future<Output = Result<Vec<RouteCandidate>, BackendError>> + Send;

    /// Look up the fare for travelling on `route` from `start` to `end`.
    ///
    /// `Ok(None)` means the backend answered but had no usable fare.
    fn fare(
        &self,
        route: &RouteNumber,
        start: &Stop,
        end: &Stop,
    ) -> impl Future<Output = Result<Option<Fare>, BackendError>> + Send;
}

/// A validated search between two stops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub start: Stop,
    pub end: Stop,
}

impl SearchRequest {
    /// Build a request from raw user input.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, SearchError> {
        let start = Stop::parse_opt(start)?;
        let end = Stop::parse_opt(end)?;
        Ok(Self { start, end })
    }
}

/// Searches for bus routes and prices each one.
#[derive(Debug, Clone)]
pub struct RouteSearchClient<B> {
    backend: B,
}

impl<B: RouteBackend> RouteSearchClient<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[cfg(test)]
    pub(crate) fn backend(&self) -> &B {
        &self.backend
    }

    /// Search for routes between two stops given as raw user input.
    ///
    /// Fails with [`SearchError::Validation`] before touching the network if
    /// either stop is missing or empty.
    pub async fn search_routes(
        &self,
        start: Option<&str>,
        end: Option<&str>,
    ) -> Result<Vec<EnrichedRoute>, SearchError> {
        let request = SearchRequest::parse(start, end)?;
        self.search(&request).await
    }

    /// Search for routes and enrich each with its fare.
    ///
    /// The fare lookups run concurrently. A failed lookup leaves that
    /// route's fare unknown and never fails the search. The result is
    /// ranked cheapest first with unpriced routes last.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<EnrichedRoute>, SearchError> {
        debug!(start = %request.start, end = %request.end, "Searching routes");

        let candidates = self
            .backend
            .search(&request.start, &request.end)
            .await
            .map_err(|e| {
                warn!(
                    start = %request.start,
                    end = %request.end,
                    error = %e,
                    "Route search failed"
                );
                SearchError::from(e)
            })?;

        let routes = self.enrich(candidates, request).await;
        let priced = routes.iter().filter(|r| r.fare.is_some()).count();
        info!(
            start = %request.start,
            end = %request.end,
            routes = routes.len(),
            priced,
            "Route search complete"
        );

        Ok(rank_by_fare(routes))
    }

    /// Attach a fare to every candidate, preserving order.
    async fn enrich(
        &self,
        candidates: Vec<RouteCandidate>,
        request: &SearchRequest,
    ) -> Vec<EnrichedRoute> {
        let lookups: Vec<_> = candidates
            .iter()
            .map(|c| self.lookup_fare(&c.route_number, request))
            .collect();

        let fares = join_all(lookups).await;

        candidates
            .into_iter()
            .zip(fares)
            .map(|(candidate, fare)| EnrichedRoute::new(candidate, fare))
            .collect()
    }

    async fn lookup_fare(&self, route: &RouteNumber, request: &SearchRequest) -> Option<Fare> {
        match self.backend.fare(route, &request.start, &request.end).await {
            Ok(Some(fare)) => Some(fare),
            Ok(None) => {
                debug!(route = %route, "No fare available");
                None
            }
            Err(e) => {
                warn!(route = %route, error = %e, "Fare lookup failed, leaving fare unknown");
                None
            }
        }
    }
}
