//! JSON array store
//!
//! Shared read-modify-write helper behind the file repositories. Each
//! entity type lives in its own file as one JSON array, and every
//! mutation rewrites the whole array. The tool is single-process and
//! synchronous, so no file locking is done.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::ports::{StorageError, StorageResult};

/// One JSON array per file, seeded with `[]` on first use
pub(crate) struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read every record; a missing file is created holding `[]`
    pub(crate) fn load<T: DeserializeOwned>(&self) -> StorageResult<Vec<T>> {
        if !self.path.exists() {
            self.seed()?;
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })?;

        serde_json::from_str(&content).map_err(|e| StorageError::Corrupted {
            path: self.path.clone(),
            message: e.to_string(),
        })
    }

    /// Replace the file contents with these records
    pub(crate) fn save<T: Serialize>(&self, records: &[T]) -> StorageResult<()> {
        self.create_parent()?;

        let content =
            serde_json::to_string_pretty(records).map_err(|e| StorageError::Serialize {
                path: self.path.clone(),
                message: e.to_string(),
            })?;

        fs::write(&self.path, content).map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    fn seed(&self) -> StorageResult<()> {
        self.create_parent()?;
        fs::write(&self.path, "[]").map_err(|e| StorageError::Io {
            path: self.path.clone(),
            source: e,
        })
    }

    fn create_parent(&self) -> StorageResult<()> {
        // parent() yields Some("") for bare filenames; nothing to create then
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StorageError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
        Ok(())
    }
}
