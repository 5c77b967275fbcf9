//! Mock storage implementation for testing.
//!
//! Provides [`MockStorage`] for unit testing without filesystem access.

use std::collections::HashMap;
use std::sync::RwLock;

use glob::Pattern;

use crate::storage::{Storage, StorageError, StorageErrorKind};

/// Backend identifier for error messages.
const BACKEND: &str = "Mock";

/// Mock storage for testing.
///
/// Stores documents in memory. Use the builder methods to configure the mock
/// with test data, and [`MockStorage::with_failure`] to make a key fail the
/// way an unreachable backend would.
///
/// # Example
///
/// ```ignore
/// use mdh_storage::{MockStorage, Storage};
///
/// let storage = MockStorage::new()
///     .with_file("service-mappings.json", "{}")
///     .with_failure("australian-suburbs.json", StorageErrorKind::Unavailable);
///
/// assert!(storage.read("australian-suburbs.json").is_err());
/// ```
#[derive(Debug, Default)]
pub struct MockStorage {
    files: RwLock<HashMap<String, String>>,
    failures: RwLock<HashMap<String, StorageErrorKind>>,
    reads: RwLock<HashMap<String, usize>>,
}

impl MockStorage {
    /// Create a new empty mock storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a document.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_file(self, path: impl Into<String>, content: impl Into<String>) -> Self {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), content.into());
        self
    }

    /// Make every read of `path` fail with the given kind.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn with_failure(self, path: impl Into<String>, kind: StorageErrorKind) -> Self {
        self.failures.write().unwrap().insert(path.into(), kind);
        self
    }

    /// Replace or add a document after construction.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn set_file(&self, path: impl Into<String>, content: impl Into<String>) {
        self.files
            .write()
            .unwrap()
            .insert(path.into(), content.into());
    }

    /// Stop failing reads of `path`.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn clear_failure(&self, path: &str) {
        self.failures.write().unwrap().remove(path);
    }

    /// Number of times `path` has been read (including failed reads).
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    #[must_use]
    pub fn read_count(&self, path: &str) -> usize {
        self.reads.read().unwrap().get(path).copied().unwrap_or(0)
    }
}

impl Storage for MockStorage {
    fn read(&self, path: &str) -> Result<String, StorageError> {
        *self
            .reads
            .write()
            .unwrap()
            .entry(path.to_owned())
            .or_default() += 1;

        if let Some(kind) = self.failures.read().unwrap().get(path) {
            return Err(StorageError::new(*kind)
                .with_key(path)
                .with_backend(BACKEND));
        }

        self.files
            .read()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| StorageError::not_found(path).with_backend(BACKEND))
    }

    fn exists(&self, path: &str) -> bool {
        self.files.read().unwrap().contains_key(path)
    }

    fn list(&self, pattern: &str) -> Result<Vec<String>, StorageError> {
        let matcher = Pattern::new(pattern).map_err(|e| {
            StorageError::new(StorageErrorKind::InvalidPath)
                .with_key(pattern)
                .with_backend(BACKEND)
                .with_source(e)
        })?;

        let mut keys: Vec<String> = self
            .files
            .read()
            .unwrap()
            .keys()
            .filter(|key| matcher.matches(key))
            .cloned()
            .collect();
        keys.sort();
        Ok(keys)
    }
}
