//! # Storage Layer
//!
//! Persistence is a set of named key-value slots. A slot holds one string value
//! and survives across sessions. The [`SlotStore`] trait abstracts the backend.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage
//!   - One file per slot: `{key}.json` inside the data directory
//!   - Writes replace the whole file
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing
//!   - No persistence
//!
//! ## Storage Format
//!
//! For `FileStore`:
//! ```text
//! .todo/
//! ├── todoList.json      # The todo list slot (JSON array)
//! └── config.json        # Configuration
//! ```
//!
//! The store does not interpret slot values. Parsing happens in
//! [`crate::persistence`].

use crate::error::Result;

pub mod fs;
pub mod memory;

/// Abstract interface for slot storage.
pub trait SlotStore {
    /// Read a slot. `Ok(None)` when the slot was never written.
    fn read_slot(&self, key: &str) -> Result<Option<String>>;

    /// Write a slot, replacing any previous value.
    fn write_slot(&mut self, key: &str, value: &str) -> Result<()>;
}
