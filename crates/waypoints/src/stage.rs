use log::warn;
use serde::{Deserialize, Serialize};

use geocore::traits::KeyValueStore;
use geocore::types::LatLng;

/// Storage key for the saved-waypoint blob.
pub const STORAGE_KEY: &str = "ugv_saved_waypoints";

/// A named target location.
///
/// Serde field names match the persisted blob format (`lat`/`lng`/`name`),
/// so blobs written by earlier versions of the system load unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub lat: f64,
    pub lng: f64,
    pub name: String,
}

impl Waypoint {
    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }
}

/// Two-phase waypoint lifecycle over a key-value store.
///
/// At most one pending candidate exists at a time and it is never persisted.
/// The saved sequence keeps insertion order and is rewritten to the store in
/// full on every mutation; no delta writes.
pub struct WaypointStage {
    store: Box<dyn KeyValueStore>,
    pending: Option<Waypoint>,
    saved: Vec<Waypoint>,
    /// Per-session counter for auto-generated names. Monotonic, never reused
    /// regardless of later deletes.
    next_auto_name: u32,
}

impl WaypointStage {
    /// Load the saved sequence from the store. Absent, corrupt, or
    /// non-array blobs all degrade to an empty sequence.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let saved = match store.get(STORAGE_KEY) {
            None => Vec::new(),
            Some(blob) => match serde_json::from_str::<Vec<Waypoint>>(&blob) {
                Ok(waypoints) => waypoints,
                Err(err) => {
                    warn!("discarding malformed waypoint blob: {err}");
                    Vec::new()
                }
            },
        };

        WaypointStage {
            store,
            pending: None,
            saved,
            next_auto_name: 1,
        }
    }

    /// Propose a pending waypoint, replacing any existing candidate. With no
    /// name given, one is generated as `"Waypoint N"` from the session
    /// counter.
    pub fn add_waypoint(&mut self, lat: f64, lng: f64, name: Option<&str>) {
        let name = match name {
            Some(name) => name.to_string(),
            None => {
                let generated = format!("Waypoint {}", self.next_auto_name);
                self.next_auto_name += 1;
                generated
            }
        };
        self.pending = Some(Waypoint { lat, lng, name });
    }

    /// Promote the pending candidate to the end of the saved sequence and
    /// persist. No-op without a pending candidate.
    pub fn save_waypoint(&mut self) {
        if let Some(waypoint) = self.pending.take() {
            self.saved.push(waypoint);
            self.persist();
        }
    }

    /// Drop the pending candidate. Never writes storage.
    pub fn discard_waypoint(&mut self) {
        self.pending = None;
    }

    /// Remove the saved entry at `index` and persist. Out-of-range indices
    /// are a silent no-op.
    pub fn delete_waypoint(&mut self, index: usize) {
        if index >= self.saved.len() {
            return;
        }
        self.saved.remove(index);
        self.persist();
    }

    /// Rename the saved entry at `index` in place and persist, if it exists.
    pub fn rename_waypoint(&mut self, index: usize, new_name: &str) {
        if let Some(waypoint) = self.saved.get_mut(index) {
            waypoint.name = new_name.to_string();
            self.persist();
        }
    }

    /// Drop every saved entry and erase the persisted blob unconditionally.
    pub fn clear_storage(&mut self) {
        self.saved.clear();
        self.store.remove(STORAGE_KEY);
    }

    pub fn pending(&self) -> Option<&Waypoint> {
        self.pending.as_ref()
    }

    pub fn saved(&self) -> &[Waypoint] {
        &self.saved
    }

    /// Rewrite the whole saved sequence under the storage key.
    fn persist(&mut self) {
        match serde_json::to_string(&self.saved) {
            Ok(blob) => self.store.set(STORAGE_KEY, &blob),
            Err(err) => warn!("failed to serialize waypoints: {err}"),
        }
    }
}
