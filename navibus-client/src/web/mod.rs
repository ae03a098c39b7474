//! Web layer for the bus route search client.
//!
//! A thin JSON front over [`crate::search`]: one request runs one search.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
