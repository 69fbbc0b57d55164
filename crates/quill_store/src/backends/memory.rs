use std::collections::HashMap;
use std::sync::Mutex;

use quill_core::{Error, KeyValueStore, Result};
use serde_json::Value;

/// Ephemeral backend. State lives for the process only; useful for tests
/// and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn load_raw(&self, key: &str) -> Result<Option<Value>> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| Error::Store("store mutex poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn save_raw(&self, key: &str, value: Value) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| Error::Store("store mutex poisoned".to_string()))?;
        entries.insert(key.to_string(), value);
        Ok(())
    }
}
