//! Collaborator interfaces
//!
//! The console never talks to a concrete map widget or storage medium.
//! Rendering goes through `MapBackend` and persistence through
//! `KeyValueStore`; `mock` provides in-process implementations of both.

use nalgebra::Point2;

use crate::types::LatLng;

/// Handle to a marker placed on a map backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerId(pub u32);

/// Which icon a marker should carry. Asset lookup is the backend's concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// The vehicle arrow, rendered with a rotation angle.
    Vehicle,
    /// A proposed waypoint pin.
    Waypoint,
}

/// Rendering surface for the console.
///
/// Implementations wrap a pannable/zoomable tile map. All calls are
/// fire-and-forget from the console's point of view: a backend that drops a
/// command does not make the issuing controller fail.
pub trait MapBackend {
    /// Add the base tile layer from a URL template plus attribution text.
    fn add_tile_layer(&mut self, url_template: &str, attribution: &str);

    /// Place a marker and return its handle.
    fn place_marker(&mut self, at: LatLng, kind: MarkerKind, rotatable: bool) -> MarkerId;

    fn set_marker_position(&mut self, marker: MarkerId, at: LatLng);

    /// Rotate a marker's icon. Only meaningful for markers placed rotatable.
    fn set_marker_rotation(&mut self, marker: MarkerId, degrees: i32);

    fn remove_marker(&mut self, marker: MarkerId);

    /// Re-center the viewport, optionally animated.
    fn recenter(&mut self, at: LatLng, zoom: u8, animate: bool);

    /// Current viewport zoom level.
    fn zoom(&self) -> u8;

    /// Project a container-relative screen point to a map coordinate.
    fn screen_to_coordinate(&self, point: Point2<f64>) -> LatLng;

    /// Tear the map down. Marker handles are invalid afterwards.
    fn destroy(&mut self);
}

/// Flat string key-value persistence.
///
/// The waypoint stage rewrites its whole blob under one key on every
/// mutation, so the store only needs get/set/remove semantics.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

impl KeyValueStore for Box<dyn KeyValueStore> {
    fn get(&self, key: &str) -> Option<String> {
        self.as_ref().get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.as_mut().set(key, value)
    }

    fn remove(&mut self, key: &str) {
        self.as_mut().remove(key)
    }
}
