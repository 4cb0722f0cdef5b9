//! Built-in route geometry.
//!
//! The live map ships fixed local coordinates rather than calling a
//! map-matching service: the animation only needs plausible loops through
//! the service area, and the one thing a network dependency would add is a
//! failure mode. The [`RoutePathSource`] seam stays in place so a fetching
//! source could be substituted without touching the driver.

use geo::point;
use headway_sim::{RoutePath, RoutePathSource, RouteSet, SourceError};

/// Loop for route 187A: Azusa Ave corridor past the Foothill Transit
/// Center. Coordinates are (longitude, latitude), WGS84; first and last
/// points coincide so the loop closes on itself.
const ROUTE_187A: &[(f64, f64)] = &[
    (-117.8421, 34.0529),
    (-117.8421, 34.0629),
    (-117.8321, 34.0629),
    (-117.8321, 34.0679),
    (-117.8121, 34.0679),
    (-117.8021, 34.0679),
    (-117.8021, 34.0529),
    (-117.8221, 34.0479),
    (-117.8421, 34.0529),
];

/// Loop for route 280B: the short Azusa Station circuit by Citrus College.
const ROUTE_280B: &[(f64, f64)] = &[
    (-117.8471, 34.0629),
    (-117.8471, 34.0729),
    (-117.8371, 34.0779),
    (-117.8221, 34.0779),
    (-117.8171, 34.0679),
    (-117.8221, 34.0579),
    (-117.8371, 34.0579),
    (-117.8471, 34.0629),
];

/// Loop for route 486C: the wide Cal Poly Pomona run toward El Monte.
const ROUTE_486C: &[(f64, f64)] = &[
    (-117.8371, 34.0379),
    (-117.8371, 34.0529),
    (-117.8271, 34.0579),
    (-117.8021, 34.0579),
    (-117.7871, 34.0529),
    (-117.7871, 34.0379),
    (-117.7971, 34.0329),
    (-117.8271, 34.0329),
    (-117.8371, 34.0379),
];

/// In the same order as the fleet, so round-robin assignment pairs each bus
/// with its own route.
const ROUTES: &[(&str, &[(f64, f64)])] = &[
    ("187A", ROUTE_187A),
    ("280B", ROUTE_280B),
    ("486C", ROUTE_486C),
];

/// The built-in route geometry source.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticRouteSource;

impl RoutePathSource for StaticRouteSource {
    async fn load_route_paths(&self) -> Result<RouteSet, SourceError> {
        let paths = ROUTES
            .iter()
            .map(|(name, coords)| {
                RoutePath::new(
                    *name,
                    coords.iter().map(|&(x, y)| point! { x: x, y: y }).collect(),
                )
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(RouteSet::new(paths))
    }
}
