//! File-backed key-value storage for session state.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use planitout_core::storage::KeyValueStore;

/// Session storage persisted as one JSON object under the user data
/// directory (e.g. `~/.local/share/planitout/session.json`).
///
/// All failure paths degrade: an unreadable file opens as an empty store,
/// and a failed write is logged and dropped. Session state must never
/// prevent a command from running.
pub struct FileStore {
    path: Option<PathBuf>,
    values: HashMap<String, String>,
}

impl FileStore {
    pub fn open() -> Self {
        let path = dirs::data_dir().map(|dir| dir.join("planitout").join("session.json"));

        if path.is_none() {
            log::warn!("no data directory available, session state will not persist");
        }

        let values = path
            .as_ref()
            .and_then(|p| fs::read_to_string(p).ok())
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        FileStore { path, values }
    }

    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };

        let raw = match serde_json::to_string_pretty(&self.values) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("could not encode session state: {e}");
                return;
            }
        };

        if let Some(parent) = path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                log::warn!("could not create {}: {e}", parent.display());
                return;
            }
        }

        if let Err(e) = fs::write(path, raw) {
            log::warn!("could not persist session state to {}: {e}", path.display());
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.persist();
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
        self.persist();
    }
}
