//! # Position sampler
//!
//! Pure mapping from (path, distance along path) to (position, heading).
//! The animation driver calls this once per vehicle per frame; nothing in
//! here has side effects or retains state between calls.

use geo::{Bearing, Haversine, InterpolatePoint, Point};
use itertools::Itertools;

use crate::config::SimulationConfig;
use crate::route::RoutePath;

/// Heading reported when a path is too short to define a direction.
const DEGENERATE_HEADING_DEG: f64 = 0.0;

/// A sampled vehicle state: where it is and which way it faces.
///
/// Transient by design; recomputed from scratch every frame and never
/// persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PathSample {
    /// Geographic position, (longitude, latitude) in degrees.
    pub position: Point<f64>,
    /// Compass heading in degrees: north = 0, east = 90, in `[0, 360)`.
    pub heading_deg: f64,
}

/// Samples position and heading at `distance_m` meters along `path`.
///
/// The distance is reduced modulo the path's total length, so motion loops
/// indefinitely: a distance of exactly the total length wraps to the start,
/// and any distance beyond keeps going around. The heading is the haversine
/// bearing from the sampled point toward a second point
/// `config.lookahead_m` further along (wrapped the same way).
///
/// Paths shorter than `config.min_loop_length_m` pin to their first point
/// with a heading of [`DEGENERATE_HEADING_DEG`], so a near-zero total
/// length never ends up in a denominator.
pub fn sample_along(path: &RoutePath, distance_m: f64, config: &SimulationConfig) -> PathSample {
    let total = path.total_length_m();
    if total < config.min_loop_length_m {
        return PathSample {
            position: path.first_point(),
            heading_deg: DEGENERATE_HEADING_DEG,
        };
    }

    let position = position_at(path, distance_m.rem_euclid(total));
    let ahead = position_at(path, (distance_m + config.lookahead_m).rem_euclid(total));
    let heading_deg = if position == ahead {
        DEGENERATE_HEADING_DEG
    } else {
        Haversine.bearing(position, ahead).rem_euclid(360.0)
    };

    PathSample {
        position,
        heading_deg,
    }
}

/// Walks the segments until the target falls inside one, then interpolates
/// along the great circle within it. `distance_m` must already be wrapped
/// into `[0, total)`.
fn position_at(path: &RoutePath, distance_m: f64) -> Point<f64> {
    let mut remaining = distance_m;
    for ((a, b), len) in path
        .points()
        .iter()
        .tuple_windows()
        .zip(path.segment_lengths_m())
    {
        if *len > 0.0 && remaining <= *len {
            return Haversine.point_at_ratio_between(*a, *b, remaining / len);
        }
        remaining -= len;
    }

    // Accumulated float error can leave a hair of distance past the final
    // segment; land on the endpoint.
    *path
        .points()
        .last()
        .expect("a route path always has at least 2 points")
}
