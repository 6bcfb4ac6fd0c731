use super::{PersistenceResult, ScheduleStorage};
use parking_lot::Mutex;
use std::collections::HashMap;

/// In-process slots. Useful for embedding and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slots: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-loaded with one slot.
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.slots.lock().insert(key.into(), value.into());
        storage
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.slots.lock().get(key).cloned()
    }

    pub fn remove(&self, key: &str) -> Option<String> {
        self.slots.lock().remove(key)
    }
}

impl ScheduleStorage for MemoryStorage {
    fn read(&self, key: &str) -> PersistenceResult<Option<String>> {
        Ok(self.get(key))
    }

    fn write(&self, key: &str, value: &str) -> PersistenceResult<()> {
        self.slots.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
