//! Candidate distribution enumeration.
//!
//! A candidate distribution is a permutation of the order indices together
//! with a tuple of run sizes that slices the permutation into one contiguous
//! run per courier. The enumerator produces the full cross product of both
//! sets lazily, with no filtering beyond the run-size sum constraint.
//!
//! - [`DistributionEnumerator`] — Lazy iterator over every candidate
//! - [`Candidate`] — One permutation plus run-size tuple
//! - [`run_size_tuples`] — Every way to split `n` orders into `k` positive runs

mod candidates;
mod run_sizes;

pub use candidates::{Candidate, DistributionEnumerator};
pub use run_sizes::run_size_tuples;
