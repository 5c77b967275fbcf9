//! Filesystem storage implementation.
//!
//! Provides [`FsStorage`] for reading data documents from a directory on disk.

use std::fs;
use std::path::{Component, Path, PathBuf};

use glob::Pattern;

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Fs";

/// Filesystem storage implementation.
///
/// Maps data keys onto files below a root directory.
///
/// # Example
///
/// ```ignore
/// use std::path::PathBuf;
/// use mdh_storage::{FsStorage, Storage};
///
/// let storage = FsStorage::new(PathBuf::from("public/data"));
/// let tools = storage.list("tools/*.json")?;
/// ```
#[derive(Debug, Clone)]
pub struct FsStorage {
    /// Root directory for data documents.
    root: PathBuf,
}

impl FsStorage {
    /// Create a new filesystem storage rooted at `root`.
    #[must_use]
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Root directory this storage reads from.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Validate that a key doesn't escape the data root.
    ///
    /// Rejects absolute keys and keys containing `..` components.
    fn validate_key(key: &str) -> Result<(), StorageError> {
        let escapes = Path::new(key)
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if escapes || key.is_empty() {
            return Err(StorageError::new(StorageErrorKind::InvalidPath)
                .with_key(key)
                .with_backend(BACKEND));
        }
        Ok(())
    }

    /// Convert an absolute file path back into a `/`-separated key.
    fn key_for(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }
}

impl Storage for FsStorage {
    fn read(&self, path: &str) -> Result<String, StorageError> {
        Self::validate_key(path)?;
        fs::read_to_string(self.root.join(path))
            .map_err(|e| StorageError::from_io(e, path).with_backend(BACKEND))
    }

    fn exists(&self, path: &str) -> bool {
        Self::validate_key(path).is_ok() && self.root.join(path).is_file()
    }

    fn list(&self, pattern: &str) -> Result<Vec<String>, StorageError> {
        Self::validate_key(pattern)?;

        let root = self.root.to_str().ok_or_else(|| {
            StorageError::new(StorageErrorKind::InvalidPath)
                .with_key(self.root.to_string_lossy())
                .with_backend(BACKEND)
        })?;
        let full_pattern = format!("{}/{pattern}", Pattern::escape(root));

        let entries = glob::glob(&full_pattern).map_err(|e| {
            StorageError::new(StorageErrorKind::InvalidPath)
                .with_key(pattern)
                .with_backend(BACKEND)
                .with_source(e)
        })?;

        let mut keys = Vec::new();
        for entry in entries {
            match entry {
                Ok(path) if path.is_file() => {
                    if let Some(key) = self.key_for(&path) {
                        keys.push(key);
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "Skipping unreadable entry while listing");
                }
            }
        }
        keys.sort();
        Ok(keys)
    }
}
