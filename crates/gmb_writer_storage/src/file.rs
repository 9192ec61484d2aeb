//! File-backed storage.
//!
//! The whole store is one JSON object of string values. Every write rewrites
//! the file through a temp file + rename so a crash never leaves it half
//! written.

use crate::KeyValueStore;
use gmb_writer_error::{GmbResult, StorageError, StorageErrorKind};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Default location of the profile file: `{data_dir}/gmb_writer/profile.json`.
pub fn default_profile_path() -> GmbResult<PathBuf> {
    let base = dirs::data_dir().ok_or_else(|| {
        StorageError::new(StorageErrorKind::InvalidPath(
            "no data directory for this platform".to_string(),
        ))
    })?;
    Ok(base.join("gmb_writer").join("profile.json"))
}

/// [`KeyValueStore`] persisted to a single JSON file.
///
/// The file is created lazily on first write. A missing file reads as an
/// empty store. A file that is not a JSON object fails reads with
/// [`StorageErrorKind::Corrupt`]; the next write saves it to `*.json.corrupt`
/// and starts from an empty store.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles within this process.
    lock: Mutex<()>,
}

impl FileKeyValueStore {
    /// Open (or prepare to create) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns error if the parent directory cannot be created.
    #[tracing::instrument(skip(path))]
    pub fn new(path: impl Into<PathBuf>) -> GmbResult<Self> {
        let path = path.into();

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::new(StorageErrorKind::DirectoryCreation(format!(
                    "{}: {}",
                    parent.display(),
                    e
                )))
            })?;
        }

        tracing::debug!(path = %path.display(), "Opened profile store");
        Ok(Self {
            path,
            lock: Mutex::new(()),
        })
    }

    /// Open the store at [`default_profile_path`].
    pub fn open_default() -> GmbResult<Self> {
        Self::new(default_profile_path()?)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_raw(&self) -> GmbResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(raw) if raw.trim().is_empty() => Ok(None),
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
            .into()),
        }
    }

    fn read_map(&self) -> GmbResult<Map<String, Value>> {
        match self.read_raw()? {
            None => Ok(Map::new()),
            Some(raw) => parse_map(&raw).map_err(|reason| {
                StorageError::new(StorageErrorKind::Corrupt(format!(
                    "{}: {}",
                    self.path.display(),
                    reason
                )))
                .into()
            }),
        }
    }

    /// Like `read_map`, but a corrupt file is copied aside and replaced by an
    /// empty store so the next write heals it.
    fn read_map_for_write(&self) -> GmbResult<Map<String, Value>> {
        let Some(raw) = self.read_raw()? else {
            return Ok(Map::new());
        };

        match parse_map(&raw) {
            Ok(map) => Ok(map),
            Err(reason) => {
                let backup = self.path.with_extension("json.corrupt");
                match std::fs::write(&backup, &raw) {
                    Ok(()) => tracing::warn!(
                        %reason,
                        backup = %backup.display(),
                        "Profile store is corrupt, starting over"
                    ),
                    Err(e) => tracing::warn!(
                        %reason,
                        error = %e,
                        "Profile store is corrupt and could not be backed up, starting over"
                    ),
                }
                Ok(Map::new())
            }
        }
    }

    fn write_map(&self, map: &Map<String, Value>) -> GmbResult<()> {
        let body = serde_json::to_string_pretty(map).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                self.path.display(),
                e
            )))
        })?;

        let temp_path = self.path.with_extension("json.tmp");
        std::fs::write(&temp_path, body).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                temp_path.display(),
                e
            )))
        })?;

        std::fs::rename(&temp_path, &self.path).map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "rename {} to {}: {}",
                temp_path.display(),
                self.path.display(),
                e
            )))
        })?;

        Ok(())
    }
}

fn parse_map(raw: &str) -> Result<Map<String, Value>, String> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err("top-level value is not an object".to_string()),
        Err(e) => Err(e.to_string()),
    }
}

impl KeyValueStore for FileKeyValueStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn get(&self, key: &str) -> GmbResult<Option<String>> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let map = self.read_map()?;
        Ok(match map.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Null) | None => None,
            // Non-string values are handed back as their JSON text
            Some(other) => Some(other.to_string()),
        })
    }

    #[tracing::instrument(skip(self, value), fields(path = %self.path.display()))]
    fn set(&self, key: &str, value: &str) -> GmbResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map_for_write()?;
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_map(&map)?;
        tracing::trace!(key, "Stored value");
        Ok(())
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    fn remove(&self, key: &str) -> GmbResult<()> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_map_for_write()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
            tracing::trace!(key, "Removed value");
        }
        Ok(())
    }
}
