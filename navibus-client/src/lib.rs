//! Bus route search client.
//!
//! Finds the bus routes between two stops through the NaviBus API, prices
//! each route with a concurrent fare lookup, and ranks the results
//! cheapest first.

pub mod backend;
pub mod config;
pub mod domain;
pub mod search;
pub mod web;

