//! Legacy service slug mappings.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Canonical target of a legacy or alternate slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMapping {
    /// Suburb-independent service identifier.
    pub base_slug: String,
    /// Location the legacy slug implied.
    pub default_location: String,
}

/// Legacy slug → [`ServiceMapping`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MappingTable {
    entries: HashMap<String, ServiceMapping>,
}

impl MappingTable {
    /// Parse the `service-mappings.json` document.
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the document is not an object of
    /// `{baseSlug, defaultLocation}` records.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self {
            entries: serde_json::from_str(json)?,
        })
    }

    /// Exact-match lookup.
    #[must_use]
    pub fn get(&self, slug: &str) -> Option<&ServiceMapping> {
        self.entries.get(slug)
    }

    /// All mappings, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ServiceMapping)> {
        self.entries.iter().map(|(slug, mapping)| (slug.as_str(), mapping))
    }

    /// Number of mappings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, ServiceMapping)> for MappingTable {
    fn from_iter<I: IntoIterator<Item = (S, ServiceMapping)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
