//! Error taxonomy for the dispatch optimizer.
//!
//! There are no retries anywhere: the search is deterministic and
//! exhaustive, so a failure is either a genuine infeasibility of the input
//! or a caller bug, never a transient condition.

use thiserror::Error;

/// Errors returned by [`dispatch::optimize`](crate::dispatch::optimize).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    /// Fewer orders than couriers: every courier must receive at least one
    /// order, so no distribution exists.
    #[error("{orders} order(s) cannot cover {couriers} courier(s): every courier needs at least one order")]
    Infeasible {
        /// Number of orders in the batch.
        orders: usize,
        /// Number of registered couriers.
        couriers: usize,
    },

    /// Dispatch was invoked over an empty fleet.
    #[error("no couriers registered")]
    NoCouriers,
}
