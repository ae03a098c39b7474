//! Domain types for the bus route search client.
//!
//! Stops, route candidates and fares. These are plain request-scoped
//! values: nothing here is persisted or shared between searches.

mod fare;
mod route;
mod stop;

pub use fare::Fare;
pub use route::{EnrichedRoute, RouteCandidate, RouteNumber, Schedule};
pub use stop::{MissingStop, Stop};
