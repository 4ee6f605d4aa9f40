//! Delivery order type.

use serde::{Deserialize, Serialize};

use super::Point;

/// A delivery order: pick up at one point, drop off at another.
///
/// The price is carried through to reporting but plays no role in the
/// optimization. Orders are identified by their index in the order list,
/// never by value: two orders with identical coordinates are distinct
/// deliveries.
///
/// # Examples
///
/// ```
/// use courier_dispatch::models::{Order, Point};
///
/// let order = Order::new(Point::new(1.0, 0.0), Point::new(1.0, 5.0), 100.0);
/// assert!((order.direct_length() - 5.0).abs() < 1e-10);
/// assert_eq!(order.price(), 100.0);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pickup: Point,
    dropoff: Point,
    price: f64,
}

impl Order {
    /// Creates a new order.
    pub fn new(pickup: Point, dropoff: Point, price: f64) -> Self {
        Self {
            pickup,
            dropoff,
            price,
        }
    }

    /// Pickup location.
    pub fn pickup(&self) -> Point {
        self.pickup
    }

    /// Dropoff location.
    pub fn dropoff(&self) -> Point {
        self.dropoff
    }

    /// Order price.
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Straight-line pickup-to-dropoff distance.
    pub fn direct_length(&self) -> f64 {
        self.pickup.distance_to(self.dropoff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_accessors() {
        let order = Order::new(Point::new(1.0, 2.0), Point::new(3.0, 4.0), 550.0);
        assert_eq!(order.pickup(), Point::new(1.0, 2.0));
        assert_eq!(order.dropoff(), Point::new(3.0, 4.0));
        assert_eq!(order.price(), 550.0);
    }

    #[test]
    fn test_direct_length() {
        let order = Order::new(Point::new(0.0, 0.0), Point::new(6.0, 8.0), 0.0);
        assert!((order.direct_length() - 10.0).abs() < 1e-10);
    }
}
