//! Headless stand-ins for the map rendering surface and the display
//! refresh scheduler, for runs where the "screen" is the log output.

use headway_sim::{FrameScheduler, MapSurface, PathSample, SelectionHandler, VehicleDetails, VehicleId};
use tracing::{debug, info};

/// Marker handle for [`TracingSurface`]: just enough to label later
/// updates with the vehicle they belong to.
pub struct LoggedMarker {
    vehicle: VehicleId,
}

/// A map surface that renders marker lifecycle calls as log lines.
#[derive(Default)]
pub struct TracingSurface {
    live_markers: usize,
}

impl MapSurface for TracingSurface {
    type MarkerId = LoggedMarker;

    fn add_vehicle_marker(
        &mut self,
        details: &VehicleDetails,
        sample: PathSample,
        _on_activate: SelectionHandler,
    ) -> LoggedMarker {
        // No pointer input reaches a headless run; the activation handler
        // is accepted per the surface contract and never fires.
        self.live_markers += 1;
        info!(
            vehicle = %details.id,
            route = %details.route_name,
            lon = sample.position.x(),
            lat = sample.position.y(),
            heading = sample.heading_deg,
            "marker placed"
        );
        LoggedMarker {
            vehicle: details.id.clone(),
        }
    }

    fn update_vehicle_marker(&mut self, marker: &LoggedMarker, sample: PathSample) {
        debug!(
            vehicle = %marker.vehicle,
            lon = sample.position.x(),
            lat = sample.position.y(),
            heading = sample.heading_deg,
            "marker moved"
        );
    }

    fn remove_vehicle_marker(&mut self, marker: LoggedMarker) {
        self.live_markers -= 1;
        info!(vehicle = %marker.vehicle, "marker removed");
    }
}

impl TracingSurface {
    pub fn live_markers(&self) -> usize {
        self.live_markers
    }
}

/// Frame scheduler for the headless loop.
///
/// Frames are actually driven by a timer in `main`, not a display, so
/// requests are only bookkeeping that keeps the driver's request/cancel
/// contract observable in the logs.
#[derive(Default)]
pub struct TickScheduler {
    next_handle: u64,
}

impl FrameScheduler for TickScheduler {
    type Handle = u64;

    fn request_frame(&mut self) -> u64 {
        let handle = self.next_handle;
        self.next_handle += 1;
        handle
    }

    fn cancel(&mut self, handle: u64) {
        debug!(handle, "pending frame cancelled");
    }
}
