//! In-memory key-value store

use std::collections::HashMap;
use std::sync::RwLock;

use super::KeyValueStore;
use crate::error::{Result, SessionError};

/// In-memory storage backend
///
/// Data is lost on drop. Useful for tests and for hosts that mirror the
/// session into their own persistence layer.
#[derive(Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.read().map(|e| e.len()).unwrap_or(0)
    }

    /// Check whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .entries
            .read()
            .map_err(|e| SessionError::StorageError(e.to_string()))?
            .get(key)
            .cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .map_err(|e| SessionError::StorageError(e.to_string()))?
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries
            .write()
            .map_err(|e| SessionError::StorageError(e.to_string()))?
            .remove(key);
        Ok(())
    }
}
