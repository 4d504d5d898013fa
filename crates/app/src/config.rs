use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use geocore::error::ConsoleError;
use geocore::types::LatLng;

/// Default tile source (OpenStreetMap).
pub const DEFAULT_TILE_URL: &str = "https://tile.openstreetmap.org/{z}/{x}/{y}.png";

pub const DEFAULT_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Console configuration, loadable from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConsoleConfig {
    /// Starting vehicle position.
    pub initial_position: LatLng,
    /// Initial viewport zoom level.
    pub zoom: u8,
    /// Tile layer URL template handed to the map backend.
    pub tile_url: String,
    pub attribution: String,
    /// Path for the file-backed waypoint store.
    pub storage_path: PathBuf,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            // Prague city center, matching the original deployment.
            initial_position: LatLng::new(50.0755, 14.4378),
            zoom: 15,
            tile_url: DEFAULT_TILE_URL.to_string(),
            attribution: DEFAULT_ATTRIBUTION.to_string(),
            storage_path: PathBuf::from("ugv_console_storage.json"),
        }
    }
}

impl ConsoleConfig {
    /// Load from a JSON file. Unknown fields are rejected loudly rather
    /// than silently ignored; missing fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConsoleError> {
        let raw = std::fs::read_to_string(path)?;
        let config: ConsoleConfig = serde_json::from_str(&raw)?;
        if config.zoom == 0 {
            return Err(ConsoleError::Config("zoom must be at least 1".into()));
        }
        Ok(config)
    }
}
