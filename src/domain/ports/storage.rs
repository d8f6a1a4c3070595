//! Storage errors shared by the repository ports

use std::path::PathBuf;
use thiserror::Error;

/// Result type for repository operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Repository failure modes
#[derive(Debug, Error)]
pub enum StorageError {
    /// Underlying file I/O failed
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Data file exists but cannot be decoded
    #[error("data file corrupted: {path}\n  → Fix: repair the JSON by hand, or delete the file to start empty\n  → Details: {message}")]
    Corrupted { path: PathBuf, message: String },

    /// Encoding records for persistence failed
    #[error("failed to encode {path}: {message}")]
    Serialize { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrupted_display_names_path_and_fix() {
        let err = StorageError::Corrupted {
            path: PathBuf::from("data/patients.json"),
            message: "expected value at line 1 column 1".to_string(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("data/patients.json"));
        assert!(rendered.contains("→ Fix:"));
    }
}
