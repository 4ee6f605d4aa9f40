//! Exhaustive waypoint-sequence search.
//!
//! Each order contributes two waypoints, its pickup and its dropoff, and a
//! valid route visits every waypoint with each dropoff strictly after its
//! matching pickup. The search enumerates every valid sequence and keeps the
//! shortest; sequences that would violate precedence are discarded before
//! any distance is computed, and no distance-based pruning is applied.
//!
//! # Complexity
//!
//! Factorial in the number of waypoints. This is intentional: the search is
//! exact and only ever runs on the handful of orders one courier carries.
//! Larger per-courier loads need a heuristic formulation instead.

use serde::Serialize;

use crate::models::{Order, Point};

/// One stop in a courier's route: an order's pickup or dropoff, identified
/// by the order's index in the slice under search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Waypoint {
    Pickup(usize),
    Dropoff(usize),
}

impl Waypoint {
    fn position(self, orders: &[Order]) -> Point {
        match self {
            Waypoint::Pickup(i) => orders[i].pickup(),
            Waypoint::Dropoff(i) => orders[i].dropoff(),
        }
    }
}

/// The optimized visiting sequence for one courier.
///
/// `stops` lists the waypoint positions in visit order; the courier's
/// starting location is the path origin but not itself a stop.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    total_distance: f64,
    stops: Vec<Point>,
}

impl RoutePlan {
    /// A plan with no stops and zero distance, for couriers without orders.
    pub fn empty() -> Self {
        Self {
            total_distance: 0.0,
            stops: Vec::new(),
        }
    }

    /// Total travel distance from the starting location through every stop.
    pub fn total_distance(&self) -> f64 {
        self.total_distance
    }

    /// Waypoint positions in visit order.
    pub fn stops(&self) -> &[Point] {
        &self.stops
    }
}

/// Finds the minimum-length precedence-valid visiting order of the given
/// orders' pickup and dropoff points, starting from `start`.
///
/// Returns `None` if `orders` is empty. A single order is the trivial case
/// `start → pickup → dropoff`, computed directly. For two or more orders the
/// first stop is pinned to `orders[0]`'s pickup; callers that want a
/// different anchor reorder the slice. The dispatch optimizer permutes the
/// order list across candidates, so every order takes the anchor position in
/// some candidate and the dispatch-level optimum is unaffected.
///
/// Ties between equal-length sequences break to the first one encountered;
/// the enumeration order is fixed, so results are reproducible.
///
/// # Examples
///
/// ```
/// use courier_dispatch::models::{Order, Point};
/// use courier_dispatch::route::optimal_route;
///
/// let orders = vec![Order::new(Point::new(1.0, 0.0), Point::new(1.0, 5.0), 100.0)];
/// let plan = optimal_route(Point::new(0.0, 0.0), &orders).expect("non-empty");
/// assert!((plan.total_distance() - 6.0).abs() < 1e-10);
/// assert_eq!(plan.stops().len(), 2);
/// ```
pub fn optimal_route(start: Point, orders: &[Order]) -> Option<RoutePlan> {
    match orders {
        [] => None,
        [only] => {
            let pickup = only.pickup();
            let dropoff = only.dropoff();
            Some(RoutePlan {
                total_distance: start.distance_to(pickup) + pickup.distance_to(dropoff),
                stops: vec![pickup, dropoff],
            })
        }
        _ => Some(search_all(start, orders)),
    }
}

fn search_all(start: Point, orders: &[Order]) -> RoutePlan {
    let n = orders.len();

    // Every waypoint except the anchor (orders[0]'s pickup) is free.
    let mut pending = Vec::with_capacity(2 * n - 1);
    pending.push(Waypoint::Dropoff(0));
    for i in 1..n {
        pending.push(Waypoint::Pickup(i));
        pending.push(Waypoint::Dropoff(i));
    }

    let mut picked = vec![false; n];
    picked[0] = true;

    let mut search = Search {
        start,
        orders,
        used: vec![false; pending.len()],
        pending,
        picked,
        sequence: vec![Waypoint::Pickup(0)],
        best_distance: f64::INFINITY,
        best_sequence: Vec::new(),
    };
    search.extend();

    let stops = search
        .best_sequence
        .iter()
        .map(|w| w.position(orders))
        .collect();
    RoutePlan {
        total_distance: search.best_distance,
        stops,
    }
}

struct Search<'a> {
    start: Point,
    orders: &'a [Order],
    pending: Vec<Waypoint>,
    used: Vec<bool>,
    picked: Vec<bool>,
    sequence: Vec<Waypoint>,
    best_distance: f64,
    best_sequence: Vec<Waypoint>,
}

impl Search<'_> {
    fn extend(&mut self) {
        if self.sequence.len() == 2 * self.orders.len() {
            let distance = self.path_length();
            if distance < self.best_distance {
                self.best_distance = distance;
                self.best_sequence = self.sequence.clone();
            }
            return;
        }

        for i in 0..self.pending.len() {
            if self.used[i] {
                continue;
            }
            let waypoint = self.pending[i];
            // A dropoff may only follow its own pickup.
            if let Waypoint::Dropoff(order) = waypoint {
                if !self.picked[order] {
                    continue;
                }
            }

            self.used[i] = true;
            if let Waypoint::Pickup(order) = waypoint {
                self.picked[order] = true;
            }
            self.sequence.push(waypoint);

            self.extend();

            self.sequence.pop();
            if let Waypoint::Pickup(order) = waypoint {
                self.picked[order] = false;
            }
            self.used[i] = false;
        }
    }

    fn path_length(&self) -> f64 {
        let mut total = 0.0;
        let mut previous = self.start;
        for waypoint in &self.sequence {
            let position = waypoint.position(self.orders);
            total += previous.distance_to(position);
            previous = position;
        }
        total
    }
}
