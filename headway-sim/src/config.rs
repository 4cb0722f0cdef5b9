//! # Simulation tunables
//!
//! Earlier iterations of the live map scattered ad hoc numeric constants
//! (speed multipliers, lookahead deltas, breakpoints) across every copy of
//! the view. They live here instead, with units, so there is exactly one
//! place to reason about them.

use std::time::Duration;

/// Parameters governing simulated vehicle motion and marker orientation.
///
/// All distances are meters, all speeds are meters per second.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    /// Ground speed of a vehicle on the longest loaded route, in m/s.
    ///
    /// Vehicles on shorter routes are slowed by the route set's
    /// normalization factor so that every route's loop takes the same
    /// wall-clock period (`max_route_length / speed_mps` seconds).
    pub speed_mps: f64,
    /// How far ahead along the path, in meters, to sample the second point
    /// used to orient a marker. Larger values smooth the heading through
    /// corners; smaller values track the path more tightly.
    pub lookahead_m: f64,
    /// Spacing, in meters, between successive vehicles' starting offsets.
    /// Desynchronizes vehicles that share a path so they don't stack.
    pub desync_spacing_m: f64,
    /// Paths with a total length below this, in meters, are degenerate:
    /// sampling pins to the first point with a fixed heading of 0.
    pub min_loop_length_m: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            speed_mps: 12.0,
            lookahead_m: 25.0,
            desync_spacing_m: 750.0,
            min_loop_length_m: 1.0,
        }
    }
}

/// Parameters for the responsive layout trigger.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Viewport widths at or below this many pixels count as mobile.
    pub mobile_breakpoint_px: u32,
    /// Minimum interval between breakpoint re-evaluations while the window
    /// is being resized. Touch devices can fire resize events at well over
    /// 60 Hz, and re-layout on each one thrashes.
    pub resize_throttle: Duration,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint_px: 768,
            resize_throttle: Duration::from_millis(100),
        }
    }
}
