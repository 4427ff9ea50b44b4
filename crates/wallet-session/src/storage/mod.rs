//! Key-value storage backends for the persisted session
//!
//! This module provides two backends:
//! 1. In-memory map (tests, embedding hosts with their own persistence)
//! 2. JSON file (durable, localStorage-like semantics for native hosts)

mod json_file;
mod memory;
mod traits;

pub use json_file::JsonFileStore;
pub use memory::MemoryStore;
pub use traits::KeyValueStore;
