//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::search::{SearchError, SearchState};

use super::dto::{RouteSearchQuery, RouteSearchResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/routes/search", get(search_routes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Search for routes between two stops.
async fn search_routes(
    State(state): State<AppState>,
    Query(query): Query<RouteSearchQuery>,
) -> Result<Response, AppError> {
    let start = query.start.unwrap_or_default();
    let end = query.end.unwrap_or_default();

    let routes = state
        .search
        .search_routes(Some(start.as_str()), Some(end.as_str()))
        .await
        .map_err(|e| AppError::from(e).with_inputs(&start, &end))?;

    let search = SearchState::new(start, end).apply(Ok(routes));
    Ok(Json(RouteSearchResponse::from(&search)).into_response())
}

/// Application error type.
///
/// Carries the submitted stops so the error body echoes them back.
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        start: String,
        end: String,
        message: String,
    },
    BadGateway {
        start: String,
        end: String,
        message: String,
    },
}

impl AppError {
    /// Attach the submitted stops to the error.
    pub fn with_inputs(self, start: &str, end: &str) -> Self {
        match self {
            AppError::BadRequest { message, .. } => AppError::BadRequest {
                start: start.to_string(),
                end: end.to_string(),
                message,
            },
            AppError::BadGateway { message, .. } => AppError::BadGateway {
                start: start.to_string(),
                end: end.to_string(),
                message,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        let message = e.to_string();
        match e {
            SearchError::Validation(_) => AppError::BadRequest {
                start: String::new(),
                end: String::new(),
                message,
            },
            SearchError::Search { .. } => AppError::BadGateway {
                start: String::new(),
                end: String::new(),
                message,
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let (start, end, message) = match self {
            AppError::BadRequest {
                start,
                end,
                message,
            }
            | AppError::BadGateway {
                start,
                end,
                message,
            } => (start, end, message),
        };

        warn!(status = %status, error = %message, "Route search request failed");

        let body = Json(RouteSearchResponse {
            start,
            end,
            routes: Vec::new(),
            error: Some(message),
        });
        (status, body).into_response()
    }
}
