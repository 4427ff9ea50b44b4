//! JSON file storage backend
//!
//! Write-through map persisted as a single pretty-printed JSON file, saved
//! atomically via a temp file and rename.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use tracing::debug;

use super::KeyValueStore;
use crate::error::{Result, SessionError};

/// Application directory qualifier for the default store location
const APP_NAME: &str = "wallet-session";

/// Durable JSON file storage backend
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<HashMap<String, String>>,
}

impl JsonFileStore {
    /// Open the store at the default per-user data directory
    pub fn new() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", APP_NAME)
            .ok_or_else(|| SessionError::StorageError("no home directory found".to_string()))?;
        std::fs::create_dir_all(dirs.data_dir())?;
        Self::with_path(dirs.data_dir().join("session-store.json"))
    }

    /// Open the store at a custom path (for testing)
    pub fn with_path(path: PathBuf) -> Result<Self> {
        let entries = Self::load_from_file(&path)?;
        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    fn load_from_file(path: &Path) -> Result<HashMap<String, String>> {
        if !path.exists() {
            debug!("No store file found at {:?}, starting empty", path);
            return Ok(HashMap::new());
        }

        let contents = std::fs::read_to_string(path)?;
        let entries = serde_json::from_str(&contents)?;
        debug!("Loaded session store from {:?}", path);
        Ok(entries)
    }

    /// Persist the current map, atomically via temp file + rename
    fn flush(&self, entries: &HashMap<String, String>) -> Result<()> {
        let contents = serde_json::to_string_pretty(entries)?;

        let temp_path = self.path.with_extension("tmp");
        std::fs::write(&temp_path, &contents)?;
        std::fs::rename(&temp_path, &self.path)?;

        debug!("Saved session store to {:?}", self.path);
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .read()
            .map_err(|e| SessionError::StorageError(e.to_string()))?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| SessionError::StorageError(e.to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| SessionError::StorageError(e.to_string()))?;
        if entries.remove(key).is_some() {
            self.flush(&entries)?;
        }
        Ok(())
    }
}
