//! Domain model types for courier dispatch.
//!
//! Provides the core records: 2-D points, delivery orders with pickup and
//! dropoff locations, and couriers with a location and an assigned route.

mod courier;
mod order;
mod point;

pub use courier::Courier;
pub use order::Order;
pub use point::Point;
