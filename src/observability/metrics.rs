//! Router metrics.
//!
//! # Metrics
//! - `router_routes_registered` (gauge): routes registered in the most recently updated router
//! - `router_registrations_total` (counter): registration attempts by outcome
//! - `router_navigations_total` (counter): navigation attempts by outcome
//!
//! # Design Decisions
//! - Recorded through the `metrics` facade; the host installs an exporter
//! - Without an installed recorder every call is a no-op
//! - Outcome labels: `ok` or the error kind (`invalid_path`, `duplicate_path`, `path_not_found`)
//! - The gauge assumes one router per process; with several routers it reports
//!   whichever registered a route last. The counters sum across routers.

use crate::routing::RouteError;

/// Outcome label for a registration or navigation result.
pub fn outcome<T>(result: &Result<T, RouteError>) -> &'static str {
    match result {
        Ok(_) => "ok",
        Err(e) => e.kind(),
    }
}

pub fn record_registration(outcome: &'static str) {
    metrics::counter!("router_registrations_total", "outcome" => outcome).increment(1);
}

pub fn record_route_count(count: usize) {
    metrics::gauge!("router_routes_registered").set(count as f64);
}

pub fn record_navigation(outcome: &'static str) {
    metrics::counter!("router_navigations_total", "outcome" => outcome).increment(1);
}
