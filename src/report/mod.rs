//! Structured and textual reporting of dispatch results.
//!
//! The report is a plain data view over a finished [`Dispatch`]: it can be
//! serialized as-is or rendered as text via `Display`. Swapping this module
//! for another output format does not touch the optimizer.

use std::fmt;

use serde::Serialize;

use crate::dispatch::Dispatch;
use crate::models::{Courier, Order, Point};

/// One order as it appears in a report.
#[derive(Debug, Clone, Serialize)]
pub struct OrderSummary {
    /// Pickup location.
    pub pickup: Point,
    /// Dropoff location.
    pub dropoff: Point,
    /// Order price.
    pub price: f64,
}

/// One courier's result: assignment, distance, and visiting sequence.
#[derive(Debug, Clone, Serialize)]
pub struct CourierReport {
    /// Courier id.
    pub id: usize,
    /// The courier's starting location.
    pub location: Point,
    /// Total travel distance.
    pub total_distance: f64,
    /// Assigned orders in delivery sequence.
    pub orders: Vec<OrderSummary>,
    /// Pickup and dropoff points in the order visited.
    pub stops: Vec<Point>,
}

/// The full dispatch result, one record per courier.
#[derive(Debug, Clone, Serialize)]
pub struct DispatchReport {
    /// Per-courier records in registration order.
    pub couriers: Vec<CourierReport>,
    /// The slowest courier's travel distance.
    pub max_distance: f64,
}

impl DispatchReport {
    /// Builds a report from a finished dispatch and the registry's records.
    ///
    /// `couriers` and `orders` must be the records the dispatch was computed
    /// over, in the same order.
    ///
    /// # Examples
    ///
    /// ```
    /// use courier_dispatch::fleet::Fleet;
    /// use courier_dispatch::models::{Order, Point};
    /// use courier_dispatch::report::DispatchReport;
    ///
    /// let mut fleet = Fleet::new();
    /// fleet.register_couriers([Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
    /// fleet.add_order(Order::new(Point::new(1.0, 0.0), Point::new(1.0, 5.0), 100.0));
    /// fleet.add_order(Order::new(Point::new(9.0, 10.0), Point::new(9.0, 6.0), 50.0));
    ///
    /// let dispatch = fleet.dispatch().expect("feasible");
    /// let report = DispatchReport::new(fleet.couriers(), fleet.orders(), &dispatch);
    /// assert_eq!(report.couriers.len(), 2);
    /// println!("{report}");
    /// ```
    pub fn new(couriers: &[Courier], orders: &[Order], dispatch: &Dispatch) -> Self {
        let couriers = couriers
            .iter()
            .zip(dispatch.routes())
            .map(|(courier, route)| {
                CourierReport {
                    id: route.courier_id(),
                    location: courier.location(),
                    total_distance: route.total_distance(),
                    orders: route
                        .orders()
                        .iter()
                        .map(|&i| OrderSummary {
                            pickup: orders[i].pickup(),
                            dropoff: orders[i].dropoff(),
                            price: orders[i].price(),
                        })
                        .collect(),
                    stops: route.stops().to_vec(),
                }
            })
            .collect();
        Self {
            couriers,
            max_distance: dispatch.max_distance(),
        }
    }
}

impl fmt::Display for DispatchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for courier in &self.couriers {
            writeln!(f, "courier {} at {}", courier.id, courier.location)?;
            for order in &courier.orders {
                writeln!(
                    f,
                    "  order: pickup {} -> dropoff {} (price {})",
                    order.pickup, order.dropoff, order.price
                )?;
            }
            if courier.stops.is_empty() {
                writeln!(f, "  no orders assigned")?;
            } else {
                write!(f, "  path: {}", courier.location)?;
                for stop in &courier.stops {
                    write!(f, " -> {stop}")?;
                }
                writeln!(f)?;
            }
            writeln!(f, "  travels {:.3}", courier.total_distance)?;
        }
        writeln!(f, "slowest courier travels {:.3}", self.max_distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fleet::Fleet;

    fn sample_report() -> DispatchReport {
        let mut fleet = Fleet::new();
        fleet.register_couriers([Point::new(0.0, 0.0), Point::new(10.0, 10.0)]);
        fleet.add_order(Order::new(Point::new(1.0, 0.0), Point::new(1.0, 5.0), 100.0));
        fleet.add_order(Order::new(Point::new(9.0, 10.0), Point::new(9.0, 6.0), 50.0));
        let dispatch = fleet.dispatch().expect("feasible");
        DispatchReport::new(fleet.couriers(), fleet.orders(), &dispatch)
    }

    #[test]
    fn test_report_contents() {
        let report = sample_report();
        assert_eq!(report.couriers.len(), 2);
        assert!((report.max_distance - 6.0).abs() < 1e-10);
        assert_eq!(report.couriers[0].orders.len(), 1);
        assert_eq!(report.couriers[0].orders[0].price, 100.0);
        assert_eq!(report.couriers[1].stops.len(), 2);
    }

    #[test]
    fn test_report_display() {
        let text = sample_report().to_string();
        assert!(text.contains("courier 0 at (0, 0)"));
        assert!(text.contains("courier 1 at (10, 10)"));
        assert!(text.contains("price 100"));
        assert!(text.contains("slowest courier travels 6.000"));
    }

    #[test]
    fn test_report_serializes() {
        let value = serde_json::to_value(sample_report()).expect("serializable");
        assert_eq!(value["couriers"].as_array().expect("array").len(), 2);
        assert_eq!(value["max_distance"], 6.0);
    }

    #[test]
    fn test_empty_batch_report() {
        let mut fleet = Fleet::new();
        fleet.register_courier(Point::new(3.0, 4.0));
        let dispatch = fleet.dispatch().expect("empty batch is trivially feasible");
        let report = DispatchReport::new(fleet.couriers(), fleet.orders(), &dispatch);
        assert!(report.to_string().contains("no orders assigned"));
    }
}
