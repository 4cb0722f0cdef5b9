//! # Animation driver
//!
//! The frame loop behind the live map. Each frame it advances every
//! vehicle's virtual distance along its route, samples a fresh position and
//! heading, and pushes the result into the vehicle registry. Frame timing
//! comes from the host through the [`FrameScheduler`] seam, so the whole
//! loop runs under a deterministic scheduler in tests.

use std::time::Instant;

use thiserror::Error;
use tracing::{debug, warn};

use crate::config::SimulationConfig;
use crate::registry::{MapSurface, SelectionHandler, VehicleRegistry};
use crate::route::RouteSet;
use crate::sampler::{PathSample, sample_along};
use crate::vehicle::{SimulatedVehicle, VehicleId};

/// A vehicle that could not be advanced this frame.
///
/// Frame errors are local to one vehicle and one frame: the driver logs
/// them, skips the vehicle, and carries on. The next frame retries
/// naturally; frames are continuous, so no backoff is needed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FrameError {
    #[error(
        "vehicle {vehicle} is assigned route index {route_index}, but only {loaded} routes are loaded"
    )]
    PathUnavailable {
        vehicle: VehicleId,
        route_index: usize,
        loaded: usize,
    },
}

/// The display-refresh seam.
///
/// [`request_frame`](FrameScheduler::request_frame) asks the host to invoke
/// [`AnimationDriver::on_frame`] after the next display refresh and returns
/// a handle for that pending invocation; [`cancel`](FrameScheduler::cancel)
/// revokes a pending invocation before it fires. In a browser-like host
/// these map onto the frame request/cancel pair; in tests a fake scheduler
/// just records the calls.
pub trait FrameScheduler {
    /// Opaque handle to a pending frame invocation.
    type Handle;

    fn request_frame(&mut self) -> Self::Handle;

    fn cancel(&mut self, handle: Self::Handle);
}

/// Whether the driver currently has a frame loop going.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DriverState {
    /// No route data loaded, or the view is torn down. Nothing scheduled.
    Idle,
    /// Route data is loaded and a frame callback is scheduled.
    Running,
}

/// Live state held only while the driver is running.
struct Running<H> {
    routes: RouteSet,
    started: Instant,
    pending: Option<H>,
}

/// Owns the frame loop and the vehicle registry for one live map view.
///
/// Constructed per view instance; there is no process-wide singleton. The
/// driver is the registry's sole writer, and frames are strictly
/// serialized by the host event loop, so nothing here needs locking.
///
/// Lifecycle: [`start`](AnimationDriver::start) moves Idle to Running once
/// route paths are available, [`stop`](AnimationDriver::stop) moves back to
/// Idle on view teardown. After `stop`, a stale frame callback that still
/// fires is a no-op; no registry write can happen past teardown.
pub struct AnimationDriver<S: MapSurface, F: FrameScheduler> {
    config: SimulationConfig,
    fleet: Vec<SimulatedVehicle>,
    registry: VehicleRegistry<S>,
    running: Option<Running<F::Handle>>,
}

impl<S: MapSurface, F: FrameScheduler> AnimationDriver<S, F> {
    pub fn new(
        fleet: Vec<SimulatedVehicle>,
        config: SimulationConfig,
        on_select: SelectionHandler,
    ) -> Self {
        Self {
            config,
            fleet,
            registry: VehicleRegistry::new(on_select),
            running: None,
        }
    }

    pub fn state(&self) -> DriverState {
        if self.running.is_some() {
            DriverState::Running
        } else {
            DriverState::Idle
        }
    }

    /// Number of markers currently alive in the registry.
    pub fn marker_count(&self) -> usize {
        self.registry.len()
    }

    /// Begins animating against a loaded route set and requests the first
    /// frame. A second `start` while already running is ignored.
    pub fn start(&mut self, routes: RouteSet, now: Instant, scheduler: &mut F) {
        if self.running.is_some() {
            warn!("start() while already running; ignoring");
            return;
        }
        debug!(
            routes = routes.len(),
            vehicles = self.fleet.len(),
            "starting animation loop"
        );
        let pending = scheduler.request_frame();
        self.running = Some(Running {
            routes,
            started: now,
            pending: Some(pending),
        });
    }

    /// One frame of the loop: advance every vehicle, push samples into the
    /// registry, and schedule the next frame.
    ///
    /// A vehicle whose route lookup fails is skipped for this frame only
    /// (logged at warn); all other vehicles still update, and the skipped
    /// one retries next frame. Called while Idle this is a no-op, which is
    /// what makes a frame callback that outlives `stop` harmless.
    pub fn on_frame(&mut self, now: Instant, surface: &mut S, scheduler: &mut F) {
        let Some(running) = self.running.as_mut() else {
            debug!("frame fired while idle; ignoring");
            return;
        };
        // This invocation consumed the pending request.
        running.pending = None;

        let elapsed_s = now.duration_since(running.started).as_secs_f64();
        for vehicle in &self.fleet {
            match advance(vehicle, &running.routes, elapsed_s, &self.config) {
                Ok(sample) => self.registry.upsert(surface, &vehicle.details, sample),
                Err(e) => warn!(vehicle = %vehicle.details.id, "skipping vehicle this frame: {e}"),
            }
        }

        running.pending = Some(scheduler.request_frame());
    }

    /// Tears the loop down: cancels the pending frame request, removes
    /// every marker, and drops the route set. Safe to call while Idle.
    pub fn stop(&mut self, surface: &mut S, scheduler: &mut F) {
        let Some(running) = self.running.take() else {
            return;
        };
        if let Some(handle) = running.pending {
            scheduler.cancel(handle);
        }
        self.registry.clear(surface);
        debug!("animation loop stopped");
    }
}

/// Computes one vehicle's sample for the current frame.
///
/// The distance formula is
/// `elapsed * base_speed * normalization_factor + offset`: the per-route
/// normalization factor keeps loop periods equal across routes of different
/// lengths, and the offset desynchronizes vehicles sharing a route.
fn advance(
    vehicle: &SimulatedVehicle,
    routes: &RouteSet,
    elapsed_s: f64,
    config: &SimulationConfig,
) -> Result<PathSample, FrameError> {
    let path = routes
        .get(vehicle.route_index)
        .ok_or_else(|| FrameError::PathUnavailable {
            vehicle: vehicle.details.id.clone(),
            route_index: vehicle.route_index,
            loaded: routes.len(),
        })?;
    let factor = routes.normalization_factor(path, config.min_loop_length_m);
    let distance_m = elapsed_s * config.speed_mps * factor + vehicle.offset_m;
    Ok(sample_along(path, distance_m, config))
}
