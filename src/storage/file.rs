use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::kv::KeyValueStore;
use crate::utils::StorageError;

/// Key-value store persisted as one JSON object file.
///
/// Every `get` reads the file and every `set` rewrites it, so handles opened on
/// the same path always observe each other's writes.
#[derive(Debug, Clone)]
pub struct FileKvStore {
    path: PathBuf,
}

impl FileKvStore {
    /// Open a store backed by `path`. The file and its parent directories are
    /// created on the first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write-then-rename keeps the previous file intact if we die mid-write
        let tmp_path = self.path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&tmp_path, json)?;
        fs::rename(&tmp_path, &self.path)?;

        debug!("Wrote {} entries to {}", entries.len(), self.path.display());
        Ok(())
    }
}

impl KeyValueStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = match self.read_entries() {
            Ok(entries) => entries,
            Err(StorageError::Serialize(e)) => {
                warn!(
                    "Discarding unreadable storage file {}: {}",
                    self.path.display(),
                    e
                );
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}
