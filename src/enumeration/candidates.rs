//! Lazy candidate iteration.

use super::run_size_tuples;

/// One candidate distribution: a permutation of the order indices and the
/// run-size tuple that slices it into per-courier runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    permutation: Vec<usize>,
    run_sizes: Vec<usize>,
}

impl Candidate {
    /// The order indices in assignment order.
    pub fn permutation(&self) -> &[usize] {
        &self.permutation
    }

    /// Length of each courier's contiguous run.
    pub fn run_sizes(&self) -> &[usize] {
        &self.run_sizes
    }

    /// Slices the permutation into contiguous runs, run `i` for courier `i`.
    pub fn runs(&self) -> impl Iterator<Item = &[usize]> + '_ {
        let mut offset = 0;
        self.run_sizes.iter().map(move |&len| {
            let run = &self.permutation[offset..offset + len];
            offset += len;
            run
        })
    }
}

/// Lazy iterator over every candidate distribution of `order_count` orders
/// across `courier_count` couriers.
///
/// The candidate space is the cross product of all permutations of
/// `[0..order_count)` with all run-size tuples; permutations are stepped
/// lexicographically so no candidate is materialized before it is needed.
/// The space is empty when no run-size tuple exists (fewer orders than
/// couriers, or no couriers).
///
/// # Examples
///
/// ```
/// use courier_dispatch::enumeration::DistributionEnumerator;
///
/// // 3 orders, 2 couriers: 3! permutations × 2 run-size tuples.
/// let count = DistributionEnumerator::new(3, 2).count();
/// assert_eq!(count, 12);
///
/// assert_eq!(DistributionEnumerator::new(1, 2).count(), 0);
/// ```
#[derive(Debug, Clone)]
pub struct DistributionEnumerator {
    permutation: Vec<usize>,
    run_sizes: Vec<Vec<usize>>,
    next_sizes: usize,
    done: bool,
}

impl DistributionEnumerator {
    /// Creates an enumerator over the full candidate space.
    pub fn new(order_count: usize, courier_count: usize) -> Self {
        Self {
            permutation: (0..order_count).collect(),
            run_sizes: run_size_tuples(order_count, courier_count),
            next_sizes: 0,
            done: false,
        }
    }

    /// Returns `true` if the candidate space is empty.
    pub fn is_empty(&self) -> bool {
        self.run_sizes.is_empty()
    }
}

impl Iterator for DistributionEnumerator {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        if self.done || self.run_sizes.is_empty() {
            return None;
        }
        let candidate = Candidate {
            permutation: self.permutation.clone(),
            run_sizes: self.run_sizes[self.next_sizes].clone(),
        };
        self.next_sizes += 1;
        if self.next_sizes == self.run_sizes.len() {
            self.next_sizes = 0;
            if !next_permutation(&mut self.permutation) {
                self.done = true;
            }
        }
        Some(candidate)
    }
}

/// Advances `seq` to its lexicographic successor in place; returns `false`
/// once `seq` is the final (descending) permutation.
fn next_permutation(seq: &mut [usize]) -> bool {
    if seq.len() < 2 {
        return false;
    }
    let mut i = seq.len() - 1;
    while i > 0 && seq[i - 1] >= seq[i] {
        i -= 1;
    }
    if i == 0 {
        return false;
    }
    let mut j = seq.len() - 1;
    while seq[j] <= seq[i - 1] {
        j -= 1;
    }
    seq.swap(i - 1, j);
    seq[i..].reverse();
    true
}
