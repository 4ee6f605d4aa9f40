//! Runs the dispatch optimizer on a small hardcoded scenario and prints the
//! per-courier report.
//!
//! Set `RUST_LOG=debug` to watch the search progress.

use courier_dispatch::fleet::Fleet;
use courier_dispatch::models::{Order, Point};
use courier_dispatch::report::DispatchReport;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut fleet = Fleet::new();
    fleet.register_couriers([
        Point::new(-15.0, 11.0),
        Point::new(-30.0, -13.0),
        Point::new(27.0, 34.5),
        Point::new(32.0, -10.0),
    ]);

    let batch = [
        ((-24.0, 16.5), (-13.0, 23.5), 1000.0),
        ((-30.0, 10.0), (-10.0, -5.0), 900.0),
        ((1.0, 3.0), (8.0, -8.0), 600.0),
        ((30.0, 10.0), (35.0, 5.0), 550.0),
        ((10.0, 10.0), (23.0, 33.0), 400.0),
        ((-17.0, -18.0), (10.0, -15.0), 123.0),
    ];
    for ((px, py), (dx, dy), price) in batch {
        fleet.add_order(Order::new(Point::new(px, py), Point::new(dx, dy), price));
    }

    match fleet.dispatch() {
        Ok(dispatch) => {
            let report = DispatchReport::new(fleet.couriers(), fleet.orders(), &dispatch);
            print!("{report}");
        }
        Err(err) => {
            eprintln!("dispatch failed: {err}");
            std::process::exit(1);
        }
    }
}
