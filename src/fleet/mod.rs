//! Owning registry of couriers and orders.

use crate::dispatch::{optimize, Dispatch};
use crate::error::DispatchError;
use crate::models::{Courier, Order, Point};

/// The single owner of all courier and order records.
///
/// Courier ids are handed out at registration time: a courier's id is its
/// position in the registration sequence. There are no hidden counters —
/// the registry's length is the next id.
///
/// # Examples
///
/// ```
/// use courier_dispatch::fleet::Fleet;
/// use courier_dispatch::models::{Order, Point};
///
/// let mut fleet = Fleet::new();
/// let id = fleet.register_courier(Point::new(0.0, 0.0));
/// assert_eq!(id, 0);
/// fleet.register_courier(Point::new(10.0, 10.0));
///
/// fleet.add_order(Order::new(Point::new(1.0, 0.0), Point::new(1.0, 5.0), 100.0));
/// fleet.add_order(Order::new(Point::new(9.0, 10.0), Point::new(9.0, 6.0), 50.0));
///
/// let dispatch = fleet.dispatch().expect("feasible");
/// assert!((dispatch.max_distance() - 6.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Fleet {
    couriers: Vec<Courier>,
    orders: Vec<Order>,
}

impl Fleet {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a courier at the given location and returns its id.
    pub fn register_courier(&mut self, location: Point) -> usize {
        let id = self.couriers.len();
        self.couriers.push(Courier::new(id, location));
        id
    }

    /// Registers one courier per location, in order.
    pub fn register_couriers<I>(&mut self, locations: I)
    where
        I: IntoIterator<Item = Point>,
    {
        for location in locations {
            self.register_courier(location);
        }
    }

    /// Adds an order to the batch and returns its index.
    pub fn add_order(&mut self, order: Order) -> usize {
        self.orders.push(order);
        self.orders.len() - 1
    }

    /// Registered couriers in id order.
    pub fn couriers(&self) -> &[Courier] {
        &self.couriers
    }

    /// The order batch in index order.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Runs the dispatch optimizer over the registered records.
    ///
    /// On success the couriers' routes hold the winning assignment.
    pub fn dispatch(&mut self) -> Result<Dispatch, DispatchError> {
        optimize(&mut self.couriers, &self.orders)
    }
}
