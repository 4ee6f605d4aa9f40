//! Minimax dispatch optimization.
//!
//! - [`optimize`] — Searches every candidate distribution and keeps the one
//!   whose slowest courier finishes earliest
//! - [`Dispatch`] / [`CourierRoute`] — The winning assignment with
//!   per-courier distances and visiting sequences

mod optimizer;

pub use optimizer::{optimize, CourierRoute, Dispatch};
