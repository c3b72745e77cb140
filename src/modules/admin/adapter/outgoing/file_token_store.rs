use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::admin::application::ports::outgoing::{TokenStore, TokenStoreError};

/// JSON object on disk, one string value per key.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place, so a
/// crash never leaves a half-written store behind.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
    // serializes read-modify-write cycles within the process
    write_lock: Mutex<()>,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, TokenStoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(TokenStoreError::Io(e.to_string())),
        };

        if raw.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&raw).map_err(|e| TokenStoreError::Corrupt(e.to_string()))
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), TokenStoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TokenStoreError::Io(e.to_string()))?;
        }

        let body =
            serde_json::to_vec_pretty(entries).map_err(|e| TokenStoreError::Io(e.to_string()))?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, body).map_err(|e| TokenStoreError::Io(e.to_string()))?;
        fs::rename(&tmp, &self.path).map_err(|e| TokenStoreError::Io(e.to_string()))
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self, key: &str) -> Result<Option<String>, TokenStoreError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), TokenStoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), TokenStoreError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.write_entries(&entries)
    }
}
