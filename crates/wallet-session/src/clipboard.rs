//! Clipboard write capability

use std::sync::Mutex;

use crate::error::{Result, SessionError};

/// Trait for the host clipboard
pub trait Clipboard: Send + Sync {
    /// Copy a single string to the clipboard
    fn copy(&self, text: &str) -> Result<()>;
}

/// In-memory clipboard
///
/// Useful for tests and for hosts that surface the copied value themselves.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
}

impl MemoryClipboard {
    /// Create an empty clipboard
    pub fn new() -> Self {
        Self::default()
    }

    /// Read back the last copied value
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().map(|c| c.clone()).unwrap_or(None)
    }
}

impl Clipboard for MemoryClipboard {
    fn copy(&self, text: &str) -> Result<()> {
        let mut contents = self
            .contents
            .lock()
            .map_err(|e| SessionError::ClipboardError(e.to_string()))?;
        *contents = Some(text.to_string());
        Ok(())
    }
}
