//! Storage backend abstraction
//!
//! The store persists through a plain key-to-string contract so the
//! mutation logic can be exercised against an in-memory backend while the
//! application wires in the file-backed one.

use std::cell::RefCell;
use std::collections::HashMap;

use freta_types::Result;

/// A durable string-per-key store.
pub trait StorageBackend {
    /// Read the value under `key`, `None` when never written.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value. The value
    /// is durable once this returns.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}

/// Volatile backend for tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a key, e.g. with corrupt data for recovery tests.
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        storage
    }

    pub fn snapshot(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}
