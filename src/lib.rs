//! # courier-dispatch
//!
//! Courier dispatch optimization: assigns a batch of pickup/dropoff orders
//! to a fleet of couriers and sequences each courier's stops so that the
//! slowest courier finishes as early as possible (minimax completion time).
//! Couriers move at unit speed along straight lines, so distance and travel
//! time coincide.
//!
//! The search is a two-level exhaustive enumeration: every way to permute
//! and slice the order batch across couriers, and for each courier the
//! shortest precedence-valid ordering of its pickup and dropoff stops. It
//! is exact by construction and factorial by design, suitable for small
//! batches only.
//!
//! ## Modules
//!
//! - [`models`] — Domain types (Point, Order, Courier)
//! - [`route`] — Precedence-constrained route optimizer for one courier
//! - [`enumeration`] — Lazy enumerator of candidate distributions
//! - [`dispatch`] — Minimax dispatch optimizer over all candidates
//! - [`fleet`] — Owning registry of couriers and orders
//! - [`report`] — Structured and textual result reporting
//! - [`error`] — Error taxonomy

pub mod dispatch;
pub mod enumeration;
pub mod error;
pub mod fleet;
pub mod models;
pub mod report;
pub mod route;

pub use error::DispatchError;
