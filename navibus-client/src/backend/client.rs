//! Route backend HTTP client.
//!
//! Talks to the NaviBus REST API: one endpoint that finds routes between
//! two stops and one that prices a route between two stops.

use std::time::Duration;

use tracing::debug;

use crate::domain::{Fare, RouteCandidate, RouteNumber, Stop};
use crate::search::RouteBackend;

use super::error::BackendError;
use super::types::{FareBody, failure_message};

/// Default base URL for the NaviBus API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Default path of the route search endpoint.
const DEFAULT_SEARCH_PATH: &str = "/routes/search/";

/// Default path of the fare endpoint.
const DEFAULT_FARE_PATH: &str = "/routes/fare/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the backend client.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Path of the route search endpoint
    pub search_path: String,
    /// Path of the fare endpoint
    pub fare_path: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl BackendConfig {
    /// Create a new config for the API at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            search_path: DEFAULT_SEARCH_PATH.to_string(),
            fare_path: DEFAULT_FARE_PATH.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set the route search endpoint path.
    pub fn with_search_path(mut self, path: impl Into<String>) -> Self {
        self.search_path = path.into();
        self
    }

    /// Set the fare endpoint path.
    pub fn with_fare_path(mut self, path: impl Into<String>) -> Self {
        self.fare_path = path.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// HTTP client for the NaviBus API.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    http: reqwest::Client,
    search_url: String,
    fare_url: String,
}

impl HttpBackend {
    /// Create a new backend client with the given configuration.
    pub fn new(config: BackendConfig) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            search_url: config.endpoint(&config.search_path),
            fare_url: config.endpoint(&config.fare_path),
        })
    }

    /// Issue a GET and return the body of a successful response.
    ///
    /// Query values are percent-encoded by reqwest.
    async fn get(&self, url: &str, query: &[(&str, &str)]) -> Result<String, BackendError> {
        let response = self.http.get(url).query(query).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                message: failure_message(&body),
            });
        }

        Ok(response.text().await?)
    }

    /// Find routes passing through `start` and then `end`.
    pub async fn search_routes(
        &self,
        start: &Stop,
        end: &Stop,
    ) -> Result<Vec<RouteCandidate>, BackendError> {
        let body = self
            .get(
                &self.search_url,
                &[("start", start.as_str()), ("end", end.as_str())],
            )
            .await?;

        let routes: Vec<RouteCandidate> =
            serde_json::from_str(&body).map_err(|e| BackendError::Json {
                message: e.to_string(),
            })?;

        debug!(start = %start, end = %end, routes = routes.len(), "Fetched route candidates");
        Ok(routes)
    }

    /// Look up the fare for `route` between two stops.
    pub async fn get_fare(
        &self,
        route: &RouteNumber,
        start: &Stop,
        end: &Stop,
    ) -> Result<Option<Fare>, BackendError> {
        let body = self
            .get(
                &self.fare_url,
                &[
                    ("route_number", route.as_str()),
                    ("source_stop", start.as_str()),
                    ("destination_stop", end.as_str()),
                ],
            )
            .await?;

        let fare: FareBody = serde_json::from_str(&body).map_err(|e| BackendError::Json {
            message: e.to_string(),
        })?;

        Ok(fare.fare())
    }
}

impl RouteBackend for HttpBackend {
    async fn search(&self, start: &Stop, end: &Stop) -> Result<Vec<RouteCandidate>, BackendError> {
        self.search_routes(start, end).await
    }

    async fn fare(
        &self,
        route: &RouteNumber,
        start: &Stop,
        end: &Stop,
    ) -> Result<Option<Fare>, BackendError> {
        self.get_fare(route, start, end).await
    }
}
