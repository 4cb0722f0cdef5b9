//! # Static transit catalog
//!
//! The fixed dataset behind the app's listings and live map: the bus fleet,
//! the bus stops, the service events, and the built-in route loops the
//! simulated vehicles travel. Nothing here is fetched or persisted; the app
//! has no backend, and every view reads the same compiled-in data.

mod catalog;
mod geometry;

pub use catalog::{BusStop, EventKind, ServiceEvent, bus_stops, fleet, service_events};
pub use geometry::StaticRouteSource;
