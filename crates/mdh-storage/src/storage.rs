//! The [`Storage`] seam and its error.
//!
//! Callers never see file paths. They ask for data keys such as
//! `"australian-suburbs.json"`, `"services/support-workers.json"` or
//! `"tools/tools.json"`, always `/`-separated and relative to the data root.

use std::error::Error;
use std::fmt;
use std::io;

/// What went wrong, independent of the backend.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[non_exhaustive]
pub enum StorageErrorKind {
    /// No document under the key.
    NotFound,
    /// The backend refused access.
    PermissionDenied,
    /// Key (or pattern) is malformed or leaves the data root.
    InvalidPath,
    /// Backend could not answer right now.
    Unavailable,
    /// Anything the backend could not classify.
    Other,
}

impl StorageErrorKind {
    /// Human-readable label used in messages.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::NotFound => "Not found",
            Self::PermissionDenied => "Permission denied",
            Self::InvalidPath => "Invalid path",
            Self::Unavailable => "Unavailable",
            Self::Other => "Error",
        }
    }

    fn from_io(kind: io::ErrorKind) -> Self {
        match kind {
            io::ErrorKind::NotFound => Self::NotFound,
            io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            io::ErrorKind::TimedOut | io::ErrorKind::Interrupted => Self::Unavailable,
            _ => Self::Other,
        }
    }
}

/// Failure to read or list data documents.
///
/// Rendered as `[Backend] Kind: source (key: k)`, each part present only
/// when known.
#[derive(Debug)]
pub struct StorageError {
    /// Backend-independent category.
    pub kind: StorageErrorKind,
    /// Data key or pattern the operation was given.
    pub key: Option<String>,
    /// Backend name, `"Fs"` or `"Mock"`.
    pub backend: Option<&'static str>,
    source: Option<Box<dyn Error + Send + Sync>>,
}

impl StorageError {
    #[must_use]
    pub fn new(kind: StorageErrorKind) -> Self {
        Self {
            kind,
            key: None,
            backend: None,
            source: None,
        }
    }

    /// Missing document under `key`.
    #[must_use]
    pub fn not_found(key: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::NotFound).with_key(key)
    }

    /// Wrap an I/O failure that happened while reading `key`.
    #[must_use]
    pub fn from_io(err: io::Error, key: impl Into<String>) -> Self {
        Self::new(StorageErrorKind::from_io(err.kind()))
            .with_key(key)
            .with_source(err)
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    #[must_use]
    pub fn with_backend(mut self, backend: &'static str) -> Self {
        self.backend = Some(backend);
        self
    }

    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Whether the document simply does not exist.
    ///
    /// Content catalogs turn this into their own "not found" instead of a
    /// storage failure.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.kind == StorageErrorKind::NotFound
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(backend) = self.backend {
            write!(f, "[{backend}] ")?;
        }
        f.write_str(self.kind.label())?;
        if let Some(source) = &self.source {
            write!(f, ": {source}")?;
        }
        if let Some(key) = &self.key {
            write!(f, " (key: {key})")?;
        }
        Ok(())
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref().map(|s| s as &(dyn Error + 'static))
    }
}

/// Read access to the site's static data documents.
///
/// Shared behind `Arc<dyn Storage>` by the lookup tables and content
/// catalogs.
pub trait Storage: Send + Sync {
    /// Whole document as UTF-8 text.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the key is invalid, missing or unreadable.
    fn read(&self, key: &str) -> Result<String, StorageError>;

    /// Whether a document is stored under `key`. Invalid keys are `false`.
    fn exists(&self, key: &str) -> bool;

    /// Sorted keys matching a glob pattern such as `"services/*.json"`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the pattern is invalid or listing fails.
    fn list(&self, pattern: &str) -> Result<Vec<String>, StorageError>;
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_not_found_carries_key() {
        let err = StorageError::not_found("services/respite.json");

        assert!(err.is_not_found());
        assert_eq!(err.key.as_deref(), Some("services/respite.json"));
        assert!(err.backend.is_none());
    }

    #[test]
    fn test_from_io_maps_kinds() {
        let cases = [
            (io::ErrorKind::NotFound, StorageErrorKind::NotFound),
            (io::ErrorKind::PermissionDenied, StorageErrorKind::PermissionDenied),
            (io::ErrorKind::TimedOut, StorageErrorKind::Unavailable),
            (io::ErrorKind::InvalidData, StorageErrorKind::Other),
        ];
        for (io_kind, expected) in cases {
            let err = StorageError::from_io(io::Error::new(io_kind, "x"), "tools/tools.json");
            assert_eq!(err.kind, expected, "{io_kind:?}");
        }
    }

    #[test]
    fn test_display_without_context() {
        let err = StorageError::new(StorageErrorKind::Unavailable);

        assert_eq!(err.to_string(), "Unavailable");
    }

    #[test]
    fn test_display_with_backend_source_and_key() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err = StorageError::from_io(io_err, "tools/tools.json").with_backend("Fs");

        assert_eq!(
            err.to_string(),
            "[Fs] Not found: file not found (key: tools/tools.json)"
        );
    }

    #[test]
    fn test_source_is_exposed() {
        let err = StorageError::from_io(io::Error::other("disk on fire"), "a.json");

        assert_eq!(err.source().unwrap().to_string(), "disk on fire");
    }
}
