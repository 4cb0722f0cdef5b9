//! # Vehicle registry
//!
//! Tracks the live marker handle for each vehicle the map has seen. The
//! animation driver is the registry's only writer; markers are created
//! lazily the first time a vehicle is sampled and torn down all at once
//! when the view goes away.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::rc::Rc;

use crate::sampler::PathSample;
use crate::vehicle::{VehicleDetails, VehicleId};

/// Callback invoked with a vehicle's id when its marker is activated
/// (tapped or clicked). What to show is the consumer's decision.
///
/// `Rc` rather than `Arc`: the whole animation loop is single-threaded
/// cooperative, and handlers never cross threads.
pub type SelectionHandler = Rc<dyn Fn(&VehicleId)>;

/// The map rendering surface the core draws on, abstractly.
///
/// The core only ever emits marker lifecycle calls: place a marker with a
/// position and heading, move it, remove it. How any of that turns into
/// pixels (sprites, DOM elements, a terminal log) is the surface's
/// business.
pub trait MapSurface {
    /// Opaque handle to a placed marker.
    type MarkerId;

    /// Places a new vehicle marker. `on_activate` is handed over exactly
    /// once, here, and must be wired to the marker's activation events for
    /// its whole lifetime.
    fn add_vehicle_marker(
        &mut self,
        details: &VehicleDetails,
        sample: PathSample,
        on_activate: SelectionHandler,
    ) -> Self::MarkerId;

    /// Moves and rotates an existing marker to an absolute position and
    /// heading.
    fn update_vehicle_marker(&mut self, marker: &Self::MarkerId, sample: PathSample);

    /// Removes the marker and releases whatever it holds.
    fn remove_vehicle_marker(&mut self, marker: Self::MarkerId);
}

/// Live mapping from vehicle id to on-screen marker handle.
pub struct VehicleRegistry<S: MapSurface> {
    markers: HashMap<VehicleId, S::MarkerId>,
    on_select: SelectionHandler,
}

impl<S: MapSurface> VehicleRegistry<S> {
    pub fn new(on_select: SelectionHandler) -> Self {
        Self {
            markers: HashMap::new(),
            on_select,
        }
    }

    /// Creates the marker on first sight of this vehicle id (wiring the
    /// selection callback at creation, once); afterwards updates position
    /// and heading in place. Updates are absolute, so repeating a call
    /// with identical input leaves the surface unchanged.
    pub fn upsert(&mut self, surface: &mut S, details: &VehicleDetails, sample: PathSample) {
        match self.markers.entry(details.id.clone()) {
            Entry::Occupied(entry) => surface.update_vehicle_marker(entry.get(), sample),
            Entry::Vacant(entry) => {
                let marker = surface.add_vehicle_marker(details, sample, Rc::clone(&self.on_select));
                entry.insert(marker);
            }
        }
    }

    /// Removes every marker and releases its handle. Safe to call any
    /// number of times, including on a registry that was never populated.
    pub fn clear(&mut self, surface: &mut S) {
        for (_, marker) in self.markers.drain() {
            surface.remove_vehicle_marker(marker);
        }
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn contains(&self, id: &VehicleId) -> bool {
        self.markers.contains_key(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vehicle::ServiceStatus;
    use geo::point;
    use std::cell::RefCell;

    fn details(id: &str) -> VehicleDetails {
        VehicleDetails {
            id: VehicleId::new(id),
            fleet_number: "280".into(),
            route_name: "280B".into(),
            status: ServiceStatus::Delayed,
            previous_stop: "Citrus College".into(),
            next_stop: "Azusa Station".into(),
            final_stop: "Puente Hills Mall".into(),
            eta_minutes: 10,
            progress_percent: 25,
        }
    }

    fn sample(lon: f64, lat: f64) -> PathSample {
        PathSample {
            position: point! { x: lon, y: lat },
            heading_deg: 45.0,
        }
    }

    /// Records every surface call so tests can assert on observable state.
    #[derive(Default)]
    struct RecordingSurface {
        next_id: usize,
        markers: HashMap<usize, (VehicleId, PathSample)>,
        adds: usize,
        removes: usize,
        handlers: Vec<(VehicleId, SelectionHandler)>,
    }

    impl MapSurface for RecordingSurface {
        type MarkerId = usize;

        fn add_vehicle_marker(
            &mut self,
            details: &VehicleDetails,
            sample: PathSample,
            on_activate: SelectionHandler,
        ) -> usize {
            let id = self.next_id;
            self.next_id += 1;
            self.adds += 1;
            self.markers.insert(id, (details.id.clone(), sample));
            self.handlers.push((details.id.clone(), on_activate));
            id
        }

        fn update_vehicle_marker(&mut self, marker: &usize, sample: PathSample) {
            let entry = self.markers.get_mut(marker).expect("marker exists");
            entry.1 = sample;
        }

        fn remove_vehicle_marker(&mut self, marker: usize) {
            self.markers.remove(&marker);
            self.removes += 1;
        }
    }

    fn registry() -> VehicleRegistry<RecordingSurface> {
        VehicleRegistry::new(Rc::new(|_| {}))
    }

    #[test]
    fn test_upsert_creates_once_then_updates() {
        let mut surface = RecordingSurface::default();
        let mut registry = registry();
        let bus = details("BUS002");

        registry.upsert(&mut surface, &bus, sample(-117.83, 34.06));
        registry.upsert(&mut surface, &bus, sample(-117.82, 34.07));

        assert_eq!(surface.adds, 1);
        assert_eq!(registry.len(), 1);
        let (_, latest) = &surface.markers[&0];
        assert!((latest.position.x() - -117.82).abs() < 1e-12);
    }

    #[test]
    fn test_upsert_identical_input_is_idempotent() {
        let mut surface = RecordingSurface::default();
        let mut registry = registry();
        let bus = details("BUS002");
        let s = sample(-117.83, 34.06);

        registry.upsert(&mut surface, &bus, s);
        let before = surface.markers[&0].clone();
        registry.upsert(&mut surface, &bus, s);
        let after = surface.markers[&0].clone();

        assert_eq!(surface.adds, 1);
        assert_eq!(surface.handlers.len(), 1);
        assert_eq!(before, after);
    }

    #[test]
    fn test_selection_wired_once_and_invocable() {
        let selected: Rc<RefCell<Vec<VehicleId>>> = Rc::default();
        let sink = Rc::clone(&selected);
        let mut registry: VehicleRegistry<RecordingSurface> =
            VehicleRegistry::new(Rc::new(move |id| sink.borrow_mut().push(id.clone())));
        let mut surface = RecordingSurface::default();
        let bus = details("BUS002");

        registry.upsert(&mut surface, &bus, sample(-117.83, 34.06));
        registry.upsert(&mut surface, &bus, sample(-117.82, 34.07));

        // One wiring, still live: a simulated tap reaches the consumer.
        assert_eq!(surface.handlers.len(), 1);
        let (id, handler) = &surface.handlers[0];
        handler(id);
        assert_eq!(selected.borrow().as_slice(), &[bus.id.clone()]);
    }

    #[test]
    fn test_clear_is_safe_to_repeat() {
        let mut surface = RecordingSurface::default();
        let mut registry = registry();

        // Never populated: still fine.
        registry.clear(&mut surface);
        assert_eq!(surface.removes, 0);

        registry.upsert(&mut surface, &details("BUS001"), sample(-117.82, 34.05));
        registry.upsert(&mut surface, &details("BUS002"), sample(-117.83, 34.06));
        registry.clear(&mut surface);
        registry.clear(&mut surface);

        assert!(registry.is_empty());
        assert_eq!(surface.removes, 2);
        assert!(surface.markers.is_empty());
    }
}
