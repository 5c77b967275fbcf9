//! Site content errors.

use mdh_storage::{Storage, StorageError, StorageErrorKind};
use serde::de::DeserializeOwned;

/// Error loading a page's content.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// The requested document does not exist.
    #[error("{kind} not found: {slug}")]
    NotFound {
        /// What was requested ("Service", "Blog post", "Tool").
        kind: &'static str,
        /// Requested slug.
        slug: String,
    },
    /// Storage failed for a reason other than a missing document.
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// The document exists but is not valid JSON for its type.
    #[error("Invalid JSON in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

impl SiteError {
    /// Whether this is a [`SiteError::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Read and deserialize `path`, reporting a missing key as `NotFound`.
pub(crate) fn read_json<T: DeserializeOwned>(
    storage: &dyn Storage,
    path: &str,
    kind: &'static str,
    slug: &str,
) -> Result<T, SiteError> {
    let json = storage.read(path).map_err(|e| match e.kind {
        StorageErrorKind::NotFound => SiteError::NotFound {
            kind,
            slug: slug.to_owned(),
        },
        _ => SiteError::Storage(e),
    })?;
    serde_json::from_str(&json).map_err(|source| SiteError::Parse {
        path: path.to_owned(),
        source,
    })
}
