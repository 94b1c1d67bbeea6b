//! Namespaced JSON record persistence
//!
//! A passive key-value blob store over the filesystem: each namespace is one
//! JSON file under the configured data directory, and each store owns its
//! namespace exclusively. Uses atomic writes (write to temp file, sync, then
//! rename) to prevent corruption.
//!
//! Storage location: `~/.local/share/pinmark/` (configurable via `Config`)
//!
//! Files:
//! - `bookmarks.json` - the persisted bookmark record
//! - `history.json` - the persisted history record, oldest-first

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::Config;
use crate::storage::error::{StorageError, StorageResult};

/// Namespace for the bookmark record
pub const BOOKMARKS_NAMESPACE: &str = "bookmarks";

/// Namespace for the history record
pub const HISTORY_NAMESPACE: &str = "history";

/// Persistence layer for namespaced JSON records
///
/// Provides atomic file operations for saving/loading one record per
/// namespace.
#[derive(Debug, Clone)]
pub struct JsonPersistence {
    data_dir: PathBuf,
}

impl JsonPersistence {
    /// Create a new persistence handler with the given configuration
    pub fn new(config: &Config) -> Self {
        Self {
            data_dir: config.data_dir.clone(),
        }
    }

    /// Get the file path backing a namespace
    pub fn path_for(&self, namespace: &str) -> PathBuf {
        self.data_dir.join(format!("{namespace}.json"))
    }

    /// Check if a record exists on disk for this namespace
    pub fn exists(&self, namespace: &str) -> bool {
        self.path_for(namespace).exists()
    }

    /// Load a record from disk
    ///
    /// Returns `None` if the record file doesn't exist.
    /// Returns an error if the file exists but can't be read or parsed.
    pub fn load<T: DeserializeOwned>(&self, namespace: &str) -> StorageResult<Option<T>> {
        let path = self.path_for(namespace);

        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| StorageError::ReadError {
                path: path.clone(),
                source: e,
            })?;

        let record = serde_json::from_str(&content).map_err(|e| StorageError::InvalidFormat {
            path,
            details: e.to_string(),
        })?;

        Ok(Some(record))
    }

    /// Save a record to disk using atomic write
    ///
    /// This writes to a temporary file first, then renames it to the target
    /// path, so the record is never left in a partially-written state.
    pub fn save<T: Serialize>(&self, namespace: &str, record: &T) -> StorageResult<()> {
        let path = self.path_for(namespace);

        let content =
            serde_json::to_vec_pretty(record).map_err(|e| StorageError::InvalidFormat {
                path: path.clone(),
                details: e.to_string(),
            })?;

        atomic_write(&path, &content)
    }

    /// Delete the record for a namespace, if present
    pub fn delete(&self, namespace: &str) -> StorageResult<()> {
        let path = self.path_for(namespace);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| StorageError::from_io(e, path))?;
        }
        Ok(())
    }
}

/// Write data to a file atomically
///
/// 1. Write to a temporary file in the same directory
/// 2. Sync the file to disk
/// 3. Rename the temp file to the target path
fn atomic_write(path: &Path, data: &[u8]) -> StorageResult<()> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| StorageError::CreateDirectory {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    // Create temp file in the same directory (for atomic rename)
    let temp_path = path.with_extension("tmp");

    let mut file =
        File::create(&temp_path).map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    file.write_all(data)
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| StorageError::from_io(e, temp_path.clone()))?;

    fs::rename(&temp_path, path).map_err(|e| StorageError::AtomicWriteFailed {
        from: temp_path,
        to: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Bookmark, Location};
    use tempfile::TempDir;

    fn test_config(temp_dir: &TempDir) -> Config {
        Config {
            data_dir: temp_dir.path().to_path_buf(),
            ..Config::default()
        }
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(&test_config(&temp_dir));

        // Initially no record
        assert!(!persistence.exists(BOOKMARKS_NAMESPACE));
        assert!(persistence
            .load::<Vec<Bookmark>>(BOOKMARKS_NAMESPACE)
            .unwrap()
            .is_none());

        let bookmarks = vec![Bookmark::new(
            Location::new("file:///src/main.rs", 3, 0),
            "entry",
        )];
        persistence.save(BOOKMARKS_NAMESPACE, &bookmarks).unwrap();
        assert!(persistence.exists(BOOKMARKS_NAMESPACE));

        let loaded: Vec<Bookmark> = persistence
            .load(BOOKMARKS_NAMESPACE)
            .unwrap()
            .unwrap();
        assert_eq!(loaded, bookmarks);
    }

    #[test]
    fn test_namespaces_are_independent() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(&test_config(&temp_dir));

        persistence
            .save(BOOKMARKS_NAMESPACE, &vec!["a".to_string()])
            .unwrap();

        assert!(persistence.exists(BOOKMARKS_NAMESPACE));
        assert!(!persistence.exists(HISTORY_NAMESPACE));
        assert_eq!(
            persistence.path_for(HISTORY_NAMESPACE).file_name().unwrap(),
            "history.json"
        );
    }

    #[test]
    fn test_load_invalid_json_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(&test_config(&temp_dir));

        fs::write(persistence.path_for(BOOKMARKS_NAMESPACE), b"not json").unwrap();

        let result = persistence.load::<Vec<Bookmark>>(BOOKMARKS_NAMESPACE);
        assert!(matches!(result, Err(StorageError::InvalidFormat { .. })));
    }

    #[test]
    fn test_delete() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(&test_config(&temp_dir));

        persistence
            .save(HISTORY_NAMESPACE, &Vec::<String>::new())
            .unwrap();
        assert!(persistence.exists(HISTORY_NAMESPACE));

        persistence.delete(HISTORY_NAMESPACE).unwrap();
        assert!(!persistence.exists(HISTORY_NAMESPACE));

        // Deleting a missing record is a no-op
        persistence.delete(HISTORY_NAMESPACE).unwrap();
    }

    #[test]
    fn test_atomic_write_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let nested_path = temp_dir
            .path()
            .join("a")
            .join("b")
            .join("c")
            .join("file.json");

        atomic_write(&nested_path, b"[]").unwrap();

        assert!(nested_path.exists());
        let content = fs::read_to_string(&nested_path).unwrap();
        assert_eq!(content, "[]");
    }

    #[test]
    fn test_save_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let persistence = JsonPersistence::new(&test_config(&temp_dir));

        persistence
            .save(BOOKMARKS_NAMESPACE, &Vec::<String>::new())
            .unwrap();

        let temp_path = persistence.path_for(BOOKMARKS_NAMESPACE).with_extension("tmp");
        assert!(!temp_path.exists());
    }
}
