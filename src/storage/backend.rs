use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::error::{AppError, AppResult};

/// Local key-value persistence substrate. Each store keeps its whole
/// collection as one serialized value under a fixed key. Implementations
/// must make `set` all-or-nothing: after a failed write the previous value
/// for the key must still be readable.
pub trait KeyValueBackend {
    /// `Ok(None)` means the key has never been written — first-run state,
    /// not an error.
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

/// One `<key>.json` file per key under a data directory. Writes land in a
/// temp file first and are renamed into place, so a crash or full disk
/// mid-write leaves the old blob intact.
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| {
            AppError::StorageUnavailable(format!("cannot create data dir {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::error!(key, error = %e, "failed to read stored blob");
                Err(AppError::StorageUnavailable(format!(
                    "cannot read key '{key}': {e}"
                )))
            }
        }
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!("{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|e| {
            AppError::StorageUnavailable(format!("cannot write key '{key}': {e}"))
        })?;
        fs::rename(&tmp, &path).map_err(|e| {
            // Drop the orphaned temp file; the old blob is untouched.
            let _ = fs::remove_file(&tmp);
            AppError::StorageUnavailable(format!("cannot commit key '{key}': {e}"))
        })
    }
}

/// In-memory backend for tests and ephemeral sessions. Cloning shares the
/// underlying map so several stores can sit on one backend.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    map: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        let map = self
            .map
            .lock()
            .map_err(|_| AppError::StorageUnavailable("backend lock poisoned".into()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut map = self
            .map
            .lock()
            .map_err(|_| AppError::StorageUnavailable("backend lock poisoned".into()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
