//! Precedence-constrained route optimization for a single courier.
//!
//! - [`optimal_route`] — Exhaustive minimum-length ordering of one courier's
//!   pickup and dropoff stops
//! - [`RoutePlan`] — The resulting stop sequence and total travel distance

mod search;

pub use search::{optimal_route, RoutePlan};
