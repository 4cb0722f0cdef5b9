//! # Live map simulation core
//!
//! The moving parts behind the transit app's live bus map: validated route
//! paths, a pure position/heading sampler, and the frame-driven animation
//! loop that keeps vehicle markers in sync with simulated motion.
//!
//! Rendering and frame timing are both seams ([`MapSurface`] and
//! [`FrameScheduler`]), so the crate never draws a pixel and the whole loop
//! can be driven by a deterministic scheduler in tests. Everything here is
//! single-threaded cooperative: one frame callback at a time, no locking.

// Private modules by default
mod config;
mod driver;
mod registry;
mod route;
mod sampler;
mod source;
mod vehicle;
pub mod viewport;

// Pub use for re-export without too many levels of hierarchy.
// Most modules only have a couple of useful definitions,
// so this flattens things for better ergonomics.
pub use config::{LayoutConfig, SimulationConfig};
pub use driver::{AnimationDriver, DriverState, FrameError, FrameScheduler};
pub use registry::{MapSurface, SelectionHandler, VehicleRegistry};
pub use route::{RoutePath, RoutePathError, RouteSet};
pub use sampler::{PathSample, sample_along};
pub use source::{RoutePathSource, SourceError};
pub use vehicle::{ServiceStatus, SimulatedVehicle, VehicleDetails, VehicleId, plan_fleet};
