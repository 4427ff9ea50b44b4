//! Storage trait definitions

use crate::error::Result;

/// Trait for durable key-value storage
///
/// Mirrors the synchronous get/set/remove surface of browser-origin
/// storage. The persisted session is the only writer assumed.
pub trait KeyValueStore: Send + Sync {
    /// Retrieve a value by key
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value under the given key
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a value by key; removing a missing key is not an error
    fn remove(&self, key: &str) -> Result<()>;
}
