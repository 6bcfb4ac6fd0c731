use crate::catalog::WorkoutCatalog;
use crate::persistence::{
    JsonFileStorage, MemoryStorage, PersistenceError, SCHEDULE_STORAGE_KEY, ScheduleStorage,
};
use crate::store::ScheduleStore;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Nothing survives the process.
    Memory,
    /// One JSON file per slot.
    #[default]
    File,
    /// A SQLite key-value table.
    Sqlite,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    pub backend: StorageBackend,
    /// Directory for `file`, database file for `sqlite`. Defaults under the
    /// platform data directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub storage_key: String,
    pub storage: StorageSettings,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            storage_key: SCHEDULE_STORAGE_KEY.to_string(),
            storage: StorageSettings::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),
    #[error("failed to open storage: {0}")]
    Storage(#[from] PersistenceError),
    #[error("storage backend '{0}' is not compiled in")]
    BackendUnavailable(&'static str),
}

/// Where planner data lives when the config names no path.
pub fn default_data_dir() -> PathBuf {
    ProjectDirs::from("com", "pulseflow", "pulseflow")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".pulseflow"))
}

impl PlannerConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    /// Like [`load`](Self::load), but a missing file yields the defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "no planner config, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let contents = toml::to_string_pretty(self)?;
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, contents).map_err(io_error)
    }

    /// Resolved location for the configured backend.
    pub fn storage_path(&self) -> PathBuf {
        if let Some(path) = &self.storage.path {
            return path.clone();
        }
        let dir = default_data_dir();
        match self.storage.backend {
            StorageBackend::Sqlite => dir.join("pulseflow.sqlite3"),
            StorageBackend::File | StorageBackend::Memory => dir,
        }
    }

    pub fn open_storage(&self) -> Result<Box<dyn ScheduleStorage>, ConfigError> {
        match self.storage.backend {
            StorageBackend::Memory => Ok(Box::new(MemoryStorage::new())),
            StorageBackend::File => Ok(Box::new(JsonFileStorage::new(self.storage_path()))),
            StorageBackend::Sqlite => self.open_sqlite(),
        }
    }

    #[cfg(feature = "sqlite")]
    fn open_sqlite(&self) -> Result<Box<dyn ScheduleStorage>, ConfigError> {
        let path = self.storage_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(PersistenceError::from)?;
        }
        let storage = crate::persistence::SqliteStorage::new(&path)?;
        Ok(Box::new(storage))
    }

    #[cfg(not(feature = "sqlite"))]
    fn open_sqlite(&self) -> Result<Box<dyn ScheduleStorage>, ConfigError> {
        Err(ConfigError::BackendUnavailable("sqlite"))
    }

    /// Opens the configured storage and returns a hydrated, persisting store.
    pub fn bootstrap(&self, catalog: WorkoutCatalog) -> Result<ScheduleStore, ConfigError> {
        let storage = self.open_storage()?;
        Ok(ScheduleStore::bootstrap(
            catalog,
            storage,
            &self.storage_key,
        ))
    }
}
