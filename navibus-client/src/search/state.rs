//! Request-scoped search state handed between the presentation layer and
//! the search client.

use serde::Serialize;

use crate::domain::EnrichedRoute;

use super::client::{RouteBackend, RouteSearchClient, SearchError};

/// What the presentation layer holds for one search form.
///
/// At most one of `results` and `error` is populated. Empty inputs are
/// treated as missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SearchState {
    pub start: String,
    pub end: String,
    pub results: Vec<EnrichedRoute>,
    pub error: Option<String>,
}

impl SearchState {
    /// Create a state for the given inputs with no results yet.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            results: Vec::new(),
            error: None,
        }
    }

    /// Fold the outcome of a search into the state.
    ///
    /// Success replaces the results and clears the error. Failure clears
    /// the results so nothing stale survives a failed attempt.
    pub fn apply(mut self, outcome: Result<Vec<EnrichedRoute>, SearchError>) -> Self {
        match outcome {
            Ok(routes) => {
                self.results = routes;
                self.error = None;
            }
            Err(e) => {
                self.results.clear();
                self.error = Some(e.to_string());
            }
        }
        self
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

impl<B: RouteBackend> RouteSearchClient<B> {
    /// Run a search for the state's current inputs and return the next state.
    pub async fn run(&self, state: SearchState) -> SearchState {
        let outcome = self
            .search_routes(Some(state.start.as_str()), Some(state.end.as_str()))
            .await;
        state.apply(outcome)
    }
}
