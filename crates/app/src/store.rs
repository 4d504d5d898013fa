//! File-backed key-value store
//!
//! One JSON object per file, keys to string values, rewritten in full on
//! every write. An unreadable or malformed file degrades to an empty map
//! with a warning so a corrupted storage file never takes the console down.

use std::collections::BTreeMap;
use std::path::PathBuf;

use log::warn;

use geocore::traits::KeyValueStore;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store at `path`, loading existing entries if the file parses.
    pub fn open(path: PathBuf) -> Self {
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(entries) => entries,
                Err(err) => {
                    warn!("ignoring malformed store file {}: {err}", path.display());
                    BTreeMap::new()
                }
            },
            Err(_) => BTreeMap::new(),
        };
        FileStore { path, entries }
    }

    fn flush(&self) {
        let blob = match serde_json::to_string_pretty(&self.entries) {
            Ok(blob) => blob,
            Err(err) => {
                warn!("failed to serialize store: {err}");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, blob) {
            warn!("failed to write store file {}: {err}", self.path.display());
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }

    fn remove(&mut self, key: &str) {
        if self.entries.remove(key).is_some() {
            self.flush();
        }
    }
}
