//! Console session
//!
//! `UgvConsole` owns the map backend handle, the motion controller, the
//! long-press detector, and the waypoint stage, and exposes the host-facing
//! command surface: lifecycle, key routing, gesture pumping, and the
//! waypoint operations. Everything runs on the host's event thread; the
//! only clock is the timestamp the host passes into `pump`.

use log::{debug, info};

use geocore::traits::{KeyValueStore, MapBackend, MarkerId, MarkerKind};
use geocore::types::LatLng;
use gesture::{LongPressDetector, PressEvent};
use motion::{KeyCommand, MotionController};
use waypoints::{Waypoint, WaypointStage};

use crate::config::ConsoleConfig;

/// A long press resolved to a map coordinate, handed to the host when
/// `pump` observes a fired gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapPressEvent {
    pub coordinate: LatLng,
}

/// One interactive console session over a map backend.
pub struct UgvConsole<M: MapBackend> {
    config: ConsoleConfig,
    map: Option<M>,
    motion: MotionController,
    detector: LongPressDetector,
    stage: WaypointStage,
    pending_marker: Option<MarkerId>,
}

impl<M: MapBackend> UgvConsole<M> {
    pub fn new(config: ConsoleConfig, store: Box<dyn KeyValueStore>) -> Self {
        let motion = MotionController::new(config.initial_position, 0);
        UgvConsole {
            config,
            map: None,
            motion,
            detector: LongPressDetector::new(),
            stage: WaypointStage::load(store),
            pending_marker: None,
        }
    }

    /// Bring the map up: tile layer, rotatable vehicle marker at the start
    /// position, viewport on it. Re-initializing replaces the previous
    /// backend after tearing it down.
    pub fn initialize(&mut self, mut backend: M) {
        if self.map.is_some() {
            self.destroy();
        }

        backend.add_tile_layer(&self.config.tile_url, &self.config.attribution);
        let marker =
            backend.place_marker(self.config.initial_position, MarkerKind::Vehicle, true);
        backend.recenter(self.config.initial_position, self.config.zoom, false);

        self.motion = MotionController::new(self.config.initial_position, 0);
        self.motion.bind_marker(marker);
        self.map = Some(backend);
        info!(
            "console initialized at ({:.4}, {:.4})",
            self.config.initial_position.lat, self.config.initial_position.lng
        );
    }

    /// Tear the session down. Subsequent motion and marker operations are
    /// silent no-ops until the next `initialize`.
    pub fn destroy(&mut self) {
        self.detector.detach();
        self.motion.unbind();
        self.pending_marker = None;
        if let Some(mut map) = self.map.take() {
            map.destroy();
        }
        info!("console destroyed");
    }

    pub fn is_initialized(&self) -> bool {
        self.map.is_some()
    }

    /// Route a raw key identifier. Unrecognized keys and keys arriving
    /// without an active map are dropped.
    pub fn handle_key(&mut self, key: &str) {
        let Some(map) = self.map.as_mut() else { return };
        if let Some(command) = KeyCommand::from_key(key) {
            debug!("key {key} -> {command:?}");
            command.apply(&mut self.motion, map);
        }
    }

    /// Attach the long-press surface with an external gating predicate.
    pub fn attach_long_press(&mut self, gate: impl Fn() -> bool + 'static) {
        self.detector.attach(gate);
    }

    pub fn detach_long_press(&mut self) {
        self.detector.detach();
    }

    /// Feed a press-start observation from the host event source.
    pub fn pointer_down(&mut self, event: PressEvent) {
        self.detector.press_start(event);
    }

    /// Feed a press-end (pointer-up / touch-end).
    pub fn pointer_up(&mut self) {
        self.detector.press_end();
    }

    /// Advance the gesture clock. A press held past its deadline is
    /// projected through the map backend at fire time and returned as a
    /// map-coordinate event for the host to consume (typically by calling
    /// `propose_waypoint`).
    pub fn pump(&mut self, now_ms: u64) -> Option<MapPressEvent> {
        let screen = self.detector.poll(now_ms)?;
        let map = self.map.as_ref()?;
        Some(MapPressEvent {
            coordinate: map.screen_to_coordinate(screen),
        })
    }

    /// Stage a pending waypoint and drop a pin on it. A re-proposal moves
    /// the existing pin instead of stacking a second one.
    pub fn propose_waypoint(&mut self, at: LatLng, name: Option<&str>) {
        self.stage.add_waypoint(at.lat, at.lng, name);
        let Some(map) = self.map.as_mut() else { return };
        match self.pending_marker {
            Some(marker) => map.set_marker_position(marker, at),
            None => {
                self.pending_marker = Some(map.place_marker(at, MarkerKind::Waypoint, false));
            }
        }
    }

    /// Promote the pending waypoint into the persisted saved sequence.
    pub fn save_waypoint(&mut self) {
        self.stage.save_waypoint();
        self.clear_pending_marker();
    }

    /// Drop the pending waypoint without persisting anything.
    pub fn discard_waypoint(&mut self) {
        self.stage.discard_waypoint();
        self.clear_pending_marker();
    }

    pub fn delete_waypoint(&mut self, index: usize) {
        self.stage.delete_waypoint(index);
    }

    pub fn rename_waypoint(&mut self, index: usize, new_name: &str) {
        self.stage.rename_waypoint(index, new_name);
    }

    pub fn clear_storage(&mut self) {
        self.stage.clear_storage();
    }

    /// Teleport the vehicle to an arbitrary coordinate.
    pub fn drive_to(&mut self, destination: LatLng) {
        let Some(map) = self.map.as_mut() else { return };
        self.motion.drive_to(destination, map);
    }

    /// Teleport the vehicle to a saved waypoint. Out-of-range indices are a
    /// no-op, like every other index-based waypoint operation.
    pub fn drive_to_waypoint(&mut self, index: usize) {
        let Some(map) = self.map.as_mut() else { return };
        if let Some(waypoint) = self.stage.saved().get(index) {
            let destination = waypoint.position();
            self.motion.drive_to(destination, map);
        }
    }

    // Polling exposure for the host UI.

    pub fn heading(&self) -> i32 {
        self.motion.heading()
    }

    pub fn position(&self) -> LatLng {
        self.motion.position()
    }

    pub fn pending_waypoint(&self) -> Option<&Waypoint> {
        self.stage.pending()
    }

    pub fn saved_waypoints(&self) -> &[Waypoint] {
        self.stage.saved()
    }

    /// The active backend, if initialized.
    pub fn backend(&self) -> Option<&M> {
        self.map.as_ref()
    }

    fn clear_pending_marker(&mut self) {
        if let (Some(marker), Some(map)) = (self.pending_marker.take(), self.map.as_mut()) {
            map.remove_marker(marker);
        }
    }
}
