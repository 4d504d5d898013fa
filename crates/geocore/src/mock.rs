//! In-process collaborators for tests and headless runs
//!
//! `MockMap` records every render command it receives and keeps enough
//! viewport state to answer projection queries deterministically.
//! `MemoryStore` / `SharedMemoryStore` back the persistence trait with a
//! plain hash map.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use nalgebra::Point2;

use crate::traits::{KeyValueStore, MapBackend, MarkerId, MarkerKind};
use crate::types::LatLng;

/// Degrees of latitude/longitude per screen pixel in the mock projection.
const MOCK_DEGREES_PER_PIXEL: f64 = 0.0001;

/// Mock viewport dimensions in pixels.
const MOCK_VIEWPORT: (f64, f64) = (800.0, 600.0);

/// A render command observed by `MockMap`, in issue order.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCommand {
    TileLayer { url_template: String },
    PlaceMarker { marker: MarkerId, at: LatLng, rotatable: bool },
    MoveMarker { marker: MarkerId, at: LatLng },
    RotateMarker { marker: MarkerId, degrees: i32 },
    RemoveMarker { marker: MarkerId },
    Recenter { at: LatLng, zoom: u8, animate: bool },
    Destroy,
}

#[derive(Debug, Clone)]
struct MarkerRecord {
    at: LatLng,
    kind: MarkerKind,
    rotation: i32,
}

/// Headless map backend with a linear screen projection around the current
/// viewport center.
#[derive(Debug)]
pub struct MockMap {
    center: LatLng,
    zoom: u8,
    markers: HashMap<MarkerId, MarkerRecord>,
    next_marker: u32,
    commands: Vec<RenderCommand>,
    destroyed: bool,
}

impl MockMap {
    pub fn new(center: LatLng, zoom: u8) -> Self {
        MockMap {
            center,
            zoom,
            markers: HashMap::new(),
            next_marker: 0,
            commands: Vec::new(),
            destroyed: false,
        }
    }

    /// Every command issued so far, in order.
    pub fn commands(&self) -> &[RenderCommand] {
        &self.commands
    }

    pub fn marker_position(&self, marker: MarkerId) -> Option<LatLng> {
        self.markers.get(&marker).map(|m| m.at)
    }

    pub fn marker_rotation(&self, marker: MarkerId) -> Option<i32> {
        self.markers.get(&marker).map(|m| m.rotation)
    }

    pub fn marker_kind(&self, marker: MarkerId) -> Option<MarkerKind> {
        self.markers.get(&marker).map(|m| m.kind)
    }

    pub fn center(&self) -> LatLng {
        self.center
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

impl MapBackend for MockMap {
    fn add_tile_layer(&mut self, url_template: &str, _attribution: &str) {
        self.commands.push(RenderCommand::TileLayer {
            url_template: url_template.to_string(),
        });
    }

    fn place_marker(&mut self, at: LatLng, kind: MarkerKind, rotatable: bool) -> MarkerId {
        let marker = MarkerId(self.next_marker);
        self.next_marker += 1;
        self.markers.insert(
            marker,
            MarkerRecord {
                at,
                kind,
                rotation: 0,
            },
        );
        self.commands.push(RenderCommand::PlaceMarker {
            marker,
            at,
            rotatable,
        });
        marker
    }

    fn set_marker_position(&mut self, marker: MarkerId, at: LatLng) {
        if let Some(record) = self.markers.get_mut(&marker) {
            record.at = at;
        }
        self.commands.push(RenderCommand::MoveMarker { marker, at });
    }

    fn set_marker_rotation(&mut self, marker: MarkerId, degrees: i32) {
        if let Some(record) = self.markers.get_mut(&marker) {
            record.rotation = degrees;
        }
        self.commands
            .push(RenderCommand::RotateMarker { marker, degrees });
    }

    fn remove_marker(&mut self, marker: MarkerId) {
        self.markers.remove(&marker);
        self.commands.push(RenderCommand::RemoveMarker { marker });
    }

    fn recenter(&mut self, at: LatLng, zoom: u8, animate: bool) {
        self.center = at;
        self.zoom = zoom;
        self.commands.push(RenderCommand::Recenter { at, zoom, animate });
    }

    fn zoom(&self) -> u8 {
        self.zoom
    }

    fn screen_to_coordinate(&self, point: Point2<f64>) -> LatLng {
        // Linear projection: the viewport center is the map center, y grows
        // downward on screen while latitude grows upward.
        let (width, height) = MOCK_VIEWPORT;
        LatLng::new(
            self.center.lat - (point.y - height / 2.0) * MOCK_DEGREES_PER_PIXEL,
            self.center.lng + (point.x - width / 2.0) * MOCK_DEGREES_PER_PIXEL,
        )
    }

    fn destroy(&mut self) {
        self.markers.clear();
        self.destroyed = true;
        self.commands.push(RenderCommand::Destroy);
    }
}

/// Hash-map backed store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

/// A `MemoryStore` behind `Rc<RefCell<..>>` so a test can keep a handle to
/// the same storage it hands to a stage, then reload from it.
#[derive(Debug, Clone, Default)]
pub struct SharedMemoryStore {
    inner: Rc<RefCell<MemoryStore>>,
}

impl SharedMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for SharedMemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.inner.borrow().get(key)
    }

    fn set(&mut self, key: &str, value: &str) {
        self.inner.borrow_mut().set(key, value);
    }

    fn remove(&mut self, key: &str) {
        self.inner.borrow_mut().remove(key);
    }
}
