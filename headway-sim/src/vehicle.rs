//! # Simulated vehicles
//!
//! A vehicle is static display data plus a binding to one of the loaded
//! route paths. The animation core never mutates the display data; it only
//! derives fresh positions from the binding each frame.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::config::SimulationConfig;

/// Identifier for a simulated vehicle (e.g. `BUS001`).
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VehicleId(String);

impl VehicleId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for VehicleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where a bus stands relative to its schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ServiceStatus {
    #[serde(rename = "On Time")]
    OnTime,
    Delayed,
    Early,
}

impl Display for ServiceStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ServiceStatus::OnTime => "On Time",
            ServiceStatus::Delayed => "Delayed",
            ServiceStatus::Early => "Early",
        })
    }
}

/// Static display payload for a vehicle marker and its popup.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleDetails {
    pub id: VehicleId,
    /// Fleet number painted on the bus, e.g. `187`.
    pub fleet_number: String,
    /// Route designation, e.g. `187A`.
    pub route_name: String,
    pub status: ServiceStatus,
    pub previous_stop: String,
    pub next_stop: String,
    pub final_stop: String,
    pub eta_minutes: u8,
    /// Trip completion, 0..=100.
    pub progress_percent: u8,
}

/// A vehicle bound to a route path, ready to animate.
#[derive(Clone, Debug)]
pub struct SimulatedVehicle {
    pub details: VehicleDetails,
    /// Index into the loaded [`crate::RouteSet`].
    pub route_index: usize,
    /// Meters added to this vehicle's distance along the path, so vehicles
    /// sharing a path don't ride on top of each other.
    pub offset_m: f64,
}

/// Binds a fleet to `route_count` loaded paths: vehicles are assigned
/// round-robin, and each gets an offset one `desync_spacing_m` further
/// along than the previous one.
///
/// With zero routes loaded every vehicle points at index 0, which the
/// driver reports as unavailable each frame until routes appear.
pub fn plan_fleet(
    details: Vec<VehicleDetails>,
    route_count: usize,
    config: &SimulationConfig,
) -> Vec<SimulatedVehicle> {
    let mut route_index = 0;
    let mut offset_m = 0.0;
    details
        .into_iter()
        .map(|details| {
            let vehicle = SimulatedVehicle {
                details,
                route_index,
                offset_m,
            };
            route_index = if route_count == 0 {
                0
            } else {
                (route_index + 1) % route_count
            };
            offset_m += config.desync_spacing_m;
            vehicle
        })
        .collect()
}
