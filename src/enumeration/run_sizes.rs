//! Run-size tuple generation.

/// Generates every `courier_count`-tuple of positive run sizes summing to
/// `order_count`.
///
/// Each entry is at least 1 (every courier gets an order) and at most
/// `order_count - courier_count + 1` (the most one courier can take while
/// leaving the others one each). Returns an empty set when
/// `order_count < courier_count` or `courier_count` is zero — there is no
/// feasible split in either case.
///
/// # Examples
///
/// ```
/// use courier_dispatch::enumeration::run_size_tuples;
///
/// assert_eq!(run_size_tuples(3, 2), vec![vec![1, 2], vec![2, 1]]);
/// assert_eq!(run_size_tuples(4, 1), vec![vec![4]]);
/// assert!(run_size_tuples(1, 2).is_empty());
/// ```
pub fn run_size_tuples(order_count: usize, courier_count: usize) -> Vec<Vec<usize>> {
    let mut tuples = Vec::new();
    if courier_count == 0 {
        return tuples;
    }
    let mut current = Vec::with_capacity(courier_count);
    fill(order_count, courier_count, &mut current, &mut tuples);
    tuples
}

fn fill(remaining: usize, slots: usize, current: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
    if slots == 1 {
        if remaining >= 1 {
            current.push(remaining);
            out.push(current.clone());
            current.pop();
        }
        return;
    }
    // Leave at least one order for every remaining slot.
    let largest = remaining.saturating_sub(slots - 1);
    for size in 1..=largest {
        current.push(size);
        fill(remaining - size, slots - 1, current, out);
        current.pop();
    }
}
