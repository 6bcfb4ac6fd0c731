use super::{PersistenceError, PersistenceResult, ScheduleStorage};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Keeps each slot as `<key>.json` inside a directory.
///
/// Writes go to a temporary sibling first and are renamed into place, so a
/// crash mid-write leaves the previous snapshot readable.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    dir: PathBuf,
}

impl JsonFileStorage {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn slot_path(&self, key: &str) -> PersistenceResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn validate_key(key: &str) -> PersistenceResult<()> {
    let acceptable = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        && !key.starts_with('.');
    if acceptable {
        Ok(())
    } else {
        Err(PersistenceError::InvalidData(format!(
            "storage key '{key}' is not a valid file name"
        )))
    }
}

impl ScheduleStorage for JsonFileStorage {
    fn read(&self, key: &str) -> PersistenceResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&self, key: &str, value: &str) -> PersistenceResult<()> {
        let final_path = self.slot_path(key)?;
        fs::create_dir_all(&self.dir)?;
        let tmp_path = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp_path, value)?;
        if let Err(rename_err) = fs::rename(&tmp_path, &final_path) {
            if !final_path.exists() {
                return Err(rename_err.into());
            }
            fs::remove_file(&final_path)?;
            fs::rename(&tmp_path, &final_path)?;
        }
        Ok(())
    }
}
