//! Route search client.
//!
//! Answers "which buses go from this stop to that one, and what do they
//! cost?" by querying the route search backend, looking up a fare for every
//! candidate route concurrently, and ranking the merged results cheapest
//! first.

mod client;
mod rank;
mod state;


pub use client::{RouteBackend, RouteSearchClient, SearchError, SearchRequest};
pub use state::SearchState;
