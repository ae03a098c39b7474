//! NaviBus API client.
//!
//! HTTP adapter for the remote service that knows the bus network. Route
//! finding and fare calculation both happen server-side; this module only
//! speaks the request/response contract:
//!
//! - `GET {search}?start=..&end=..` returns a JSON array of routes, or an
//!   object with an `error` or `message` field on failure
//! - `GET {fare}?route_number=..&source_stop=..&destination_stop=..`
//!   returns `{"fare": <number>}`

mod client;
mod error;
mod types;

pub use client::{BackendConfig, DEFAULT_BASE_URL, HttpBackend};
pub use error::BackendError;
pub use types::GENERIC_FAILURE;
