//! The mock fleet, stops, and events the app displays.
//!
//! Values mirror what riders would see for the Foothill Transit service
//! area around Pomona and Azusa. The accessors build fresh owned values so
//! callers can hold them however they like.

use chrono::NaiveDate;
use geo::{Point, point};
use headway_sim::{ServiceStatus, VehicleDetails, VehicleId};
use serde::{Deserialize, Serialize};

/// A physical bus stop shown in the stop listing and on the map.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusStop {
    pub id: String,
    pub name: String,
    pub address: String,
    /// Route numbers serving this stop.
    pub routes: Vec<String>,
    pub amenities: Vec<String>,
    pub lon: f64,
    pub lat: f64,
}

impl BusStop {
    pub fn position(&self) -> Point<f64> {
        point! { x: self.lon, y: self.lat }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventKind {
    #[serde(rename = "Service Change")]
    ServiceChange,
    #[serde(rename = "Community Event")]
    CommunityEvent,
}

/// A rider-facing announcement: a planned service change or a community
/// event reachable by transit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEvent {
    pub id: String,
    pub title: String,
    pub kind: EventKind,
    pub date: NaiveDate,
    pub location: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub affected_routes: Vec<String>,
}

// All calendar dates below are literal and valid.
fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("literal date is valid")
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// The three-bus mock fleet the live map animates.
pub fn fleet() -> Vec<VehicleDetails> {
    vec![
        VehicleDetails {
            id: VehicleId::new("BUS001"),
            fleet_number: "187".into(),
            route_name: "187A".into(),
            status: ServiceStatus::OnTime,
            previous_stop: "Azusa Ave / Gladstone St".into(),
            next_stop: "Foothill Transit Center".into(),
            final_stop: "Montclair Transit Center".into(),
            eta_minutes: 5,
            progress_percent: 75,
        },
        VehicleDetails {
            id: VehicleId::new("BUS002"),
            fleet_number: "280".into(),
            route_name: "280B".into(),
            status: ServiceStatus::Delayed,
            previous_stop: "Citrus College".into(),
            next_stop: "Azusa Station".into(),
            final_stop: "Puente Hills Mall".into(),
            eta_minutes: 10,
            progress_percent: 25,
        },
        VehicleDetails {
            id: VehicleId::new("BUS003"),
            fleet_number: "486".into(),
            route_name: "486C".into(),
            status: ServiceStatus::OnTime,
            previous_stop: "Diamond Bar".into(),
            next_stop: "Cal Poly Pomona".into(),
            final_stop: "El Monte Station".into(),
            eta_minutes: 3,
            progress_percent: 50,
        },
    ]
}

pub fn bus_stops() -> Vec<BusStop> {
    vec![
        BusStop {
            id: "STOP001".into(),
            name: "Foothill Transit Center".into(),
            address: "3801 W Temple Ave, Pomona, CA 91768".into(),
            routes: strings(&["486", "190", "194", "480"]),
            amenities: strings(&["Shelter", "Seating", "Real-time Display"]),
            lon: -117.8221,
            lat: 34.0579,
        },
        BusStop {
            id: "STOP002".into(),
            name: "Azusa Station".into(),
            address: "Azusa Station, Azusa, CA 91702".into(),
            routes: strings(&["280"]),
            amenities: strings(&["Shelter", "Seating"]),
            lon: -117.8321,
            lat: 34.0679,
        },
        BusStop {
            id: "STOP003".into(),
            name: "Cal Poly Pomona".into(),
            address: "3801 W Temple Ave, Pomona, CA 91768".into(),
            routes: strings(&["486", "190", "194", "480"]),
            amenities: strings(&["Shelter", "Seating", "Real-time Display"]),
            lon: -117.8121,
            lat: 34.0479,
        },
    ]
}

pub fn service_events() -> Vec<ServiceEvent> {
    vec![
        ServiceEvent {
            id: "1".into(),
            title: "Route 187 Service Change".into(),
            kind: EventKind::ServiceChange,
            date: date(2024, 4, 15),
            location: "Azusa - Pasadena Route".into(),
            description: "Temporary route modification due to road construction on Foothill Boulevard.".into(),
            affected_routes: strings(&["187", "280"]),
        },
        ServiceEvent {
            id: "2".into(),
            title: "Cal Poly Pomona Community Art Exhibition".into(),
            kind: EventKind::CommunityEvent,
            date: date(2024, 4, 20),
            location: "Cal Poly Pomona Art Gallery".into(),
            description: "Join us for a special exhibition featuring local artists and Cal Poly Pomona students. Free admission with your Foothill Transit pass. Refreshments will be served.".into(),
            affected_routes: Vec::new(),
        },
        ServiceEvent {
            id: "3".into(),
            title: "Route 486 Schedule Update".into(),
            kind: EventKind::ServiceChange,
            date: date(2024, 4, 25),
            location: "El Monte - Pomona Route".into(),
            description: "New schedule implementation to improve service frequency during peak hours.".into(),
            affected_routes: strings(&["486"]),
        },
    ]
}
