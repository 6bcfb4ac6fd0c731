use std::io;
use std::sync::Arc;
use thiserror::Error;

/// Storage slot holding the serialized week.
pub const SCHEDULE_STORAGE_KEY: &str = "pulseflow-schedule-v1";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[cfg(feature = "sqlite")]
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("invalid data: {0}")]
    InvalidData(String),
}

pub type PersistenceResult<T> = Result<T, PersistenceError>;

/// A key-value slot store for serialized schedules.
///
/// Reads and writes are synchronous local effects. `read` returns `Ok(None)`
/// when the slot has never been written.
pub trait ScheduleStorage {
    fn read(&self, key: &str) -> PersistenceResult<Option<String>>;
    fn write(&self, key: &str, value: &str) -> PersistenceResult<()>;
}

impl<T: ScheduleStorage + ?Sized> ScheduleStorage for Box<T> {
    fn read(&self, key: &str) -> PersistenceResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> PersistenceResult<()> {
        (**self).write(key, value)
    }
}

impl<T: ScheduleStorage + ?Sized> ScheduleStorage for Arc<T> {
    fn read(&self, key: &str) -> PersistenceResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> PersistenceResult<()> {
        (**self).write(key, value)
    }
}

pub mod file;
pub mod memory;
pub mod reconciler;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use file::JsonFileStorage;
pub use memory::MemoryStorage;
pub use reconciler::{LifecycleError, PersistenceReconciler, ReconcilePhase, merge_stored};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteStorage;
