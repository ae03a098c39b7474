//! Application state for the web layer.

use std::sync::Arc;

use crate::backend::HttpBackend;
use crate::search::RouteSearchClient;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Route search client backed by the NaviBus API
    pub search: Arc<RouteSearchClient<HttpBackend>>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(search: RouteSearchClient<HttpBackend>) -> Self {
        Self {
            search: Arc::new(search),
        }
    }
}
