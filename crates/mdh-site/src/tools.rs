//! Tool index and tool documents.

use std::sync::Arc;

use mdh_storage::Storage;
use mdh_tools::{ToolCatalog, ToolData, ToolSummary};

use crate::error::{SiteError, read_json};

/// Data key of the tool index.
pub const TOOLS_INDEX_PATH: &str = "tools/tools.json";

/// Tools published under `tools/`.
pub struct ToolLibrary {
    storage: Arc<dyn Storage>,
}

impl ToolLibrary {
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// Tool index. An unreadable index yields an empty list.
    #[must_use]
    pub fn index(&self) -> Vec<ToolSummary> {
        let index = read_json(
            self.storage.as_ref(),
            TOOLS_INDEX_PATH,
            "Tool index",
            TOOLS_INDEX_PATH,
        );
        index.unwrap_or_else(|e| {
            tracing::warn!(path = TOOLS_INDEX_PATH, error = %e, "Failed to load tool index");
            Vec::new()
        })
    }

    /// Index as a browsable catalogue.
    #[must_use]
    pub fn catalog(&self) -> ToolCatalog {
        ToolCatalog::new(self.index())
    }

    /// Full document of a published tool.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] if `slug` is not in the index or its
    /// document is missing, and [`SiteError::Parse`] if the document is
    /// malformed.
    pub fn load(&self, slug: &str) -> Result<ToolData, SiteError> {
        if !self.index().iter().any(|tool| tool.slug == slug) {
            return Err(SiteError::NotFound {
                kind: "Tool",
                slug: slug.to_owned(),
            });
        }
        read_json(self.storage.as_ref(), &format!("tools/{slug}.json"), "Tool", slug)
    }
}

impl std::fmt::Debug for ToolLibrary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolLibrary").finish_non_exhaustive()
    }
}
