//! Courier type.

use serde::{Deserialize, Serialize};

use super::Point;

/// A courier with a fixed starting location and an assigned delivery route.
///
/// The route holds order indices in delivery sequence. It is empty at
/// creation and written by the dispatch optimizer once the winning
/// distribution is known.
///
/// # Examples
///
/// ```
/// use courier_dispatch::models::{Courier, Point};
///
/// let courier = Courier::new(0, Point::new(-15.0, 11.0));
/// assert_eq!(courier.id(), 0);
/// assert!(!courier.has_orders());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Courier {
    id: usize,
    location: Point,
    route: Vec<usize>,
}

impl Courier {
    /// Creates a courier with an empty route.
    pub fn new(id: usize, location: Point) -> Self {
        Self {
            id,
            location,
            route: Vec::new(),
        }
    }

    /// Courier ID, assigned by the registry at registration.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current location (the route's starting point).
    pub fn location(&self) -> Point {
        self.location
    }

    /// Assigned order indices in delivery sequence.
    pub fn route(&self) -> &[usize] {
        &self.route
    }

    /// Returns `true` if at least one order is assigned.
    pub fn has_orders(&self) -> bool {
        !self.route.is_empty()
    }

    /// Replaces the assigned route.
    pub fn set_route(&mut self, route: Vec<usize>) {
        self.route = route;
    }

    /// Removes all assigned orders.
    pub fn clear_route(&mut self) {
        self.route.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_courier_new() {
        let courier = Courier::new(3, Point::new(27.0, 34.5));
        assert_eq!(courier.id(), 3);
        assert_eq!(courier.location(), Point::new(27.0, 34.5));
        assert!(courier.route().is_empty());
        assert!(!courier.has_orders());
    }

    #[test]
    fn test_courier_route_lifecycle() {
        let mut courier = Courier::new(0, Point::new(0.0, 0.0));
        courier.set_route(vec![2, 0, 1]);
        assert!(courier.has_orders());
        assert_eq!(courier.route(), &[2, 0, 1]);
        courier.clear_route();
        assert!(!courier.has_orders());
    }
}
