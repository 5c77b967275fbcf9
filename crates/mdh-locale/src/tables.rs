//! Load-once lookup tables.
//!
//! [`LookupTables`] owns the suburb and service-mapping tables for the
//! lifetime of whoever constructed it. Each table is read from storage at most
//! once after a successful load; a failed load is logged, treated as an empty
//! table, and retried on the next access.

use std::sync::{Arc, RwLock};

use mdh_storage::Storage;

use crate::error::LocaleError;
use crate::mapping::MappingTable;
use crate::related::{RelatedOrder, RelatedSuburb, related_suburbs};
use crate::resolve::{ResolvedSlug, resolve_slug};
use crate::suburb::{SuburbInfo, SuburbTable};

/// Data key of the suburb table.
pub const SUBURBS_PATH: &str = "australian-suburbs.json";

/// Data key of the service-mapping table.
pub const MAPPINGS_PATH: &str = "service-mappings.json";

/// Memoized suburb and service-mapping tables.
///
/// Two callers racing on the first load may both read the document; the data
/// is immutable, so the last writer simply replaces an identical table.
pub struct LookupTables {
    storage: Option<Arc<dyn Storage>>,
    suburbs: RwLock<Option<Arc<SuburbTable>>>,
    mappings: RwLock<Option<Arc<MappingTable>>>,
}

impl LookupTables {
    /// Create tables that load lazily from `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self {
            storage: Some(storage),
            suburbs: RwLock::new(None),
            mappings: RwLock::new(None),
        }
    }

    /// Create tables from already-loaded data, with no backing storage.
    #[must_use]
    pub fn from_parts(suburbs: SuburbTable, mappings: MappingTable) -> Self {
        Self {
            storage: None,
            suburbs: RwLock::new(Some(Arc::new(suburbs))),
            mappings: RwLock::new(Some(Arc::new(mappings))),
        }
    }

    /// Suburb table, loading it on first use.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn suburbs(&self) -> Arc<SuburbTable> {
        if let Some(table) = self.suburbs.read().unwrap().as_ref() {
            return Arc::clone(table);
        }

        match self.load(SUBURBS_PATH, SuburbTable::from_json) {
            Ok(table) => {
                tracing::debug!(suburbs = table.len(), "Loaded suburb table");
                let table = Arc::new(table);
                *self.suburbs.write().unwrap() = Some(Arc::clone(&table));
                table
            }
            Err(e) => {
                tracing::warn!(path = SUBURBS_PATH, error = %e, "Failed to load suburb table");
                Arc::new(SuburbTable::default())
            }
        }
    }

    /// Service-mapping table, loading it on first use.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn mappings(&self) -> Arc<MappingTable> {
        if let Some(table) = self.mappings.read().unwrap().as_ref() {
            return Arc::clone(table);
        }

        match self.load(MAPPINGS_PATH, MappingTable::from_json) {
            Ok(table) => {
                tracing::debug!(mappings = table.len(), "Loaded service mapping table");
                let table = Arc::new(table);
                *self.mappings.write().unwrap() = Some(Arc::clone(&table));
                table
            }
            Err(e) => {
                tracing::warn!(path = MAPPINGS_PATH, error = %e, "Failed to load service mappings");
                Arc::new(MappingTable::default())
            }
        }
    }

    /// Forget both memoized tables so the next access reloads them.
    ///
    /// Tables built with [`LookupTables::from_parts`] become empty.
    ///
    /// # Panics
    ///
    /// Panics if the internal lock is poisoned.
    pub fn reset(&self) {
        *self.suburbs.write().unwrap() = None;
        *self.mappings.write().unwrap() = None;
    }

    /// State and region for a suburb slug (case-insensitive).
    pub fn suburb_info(&self, slug: &str) -> Option<SuburbInfo> {
        self.suburbs().get(slug).cloned()
    }

    /// Split `requested` into a base service slug and an optional suburb.
    ///
    /// Never fails: unreadable tables resolve the slug to itself.
    pub fn resolve_service_slug(&self, requested: &str) -> ResolvedSlug {
        let mappings = self.mappings();
        let suburbs = self.suburbs();
        let resolved = resolve_slug(requested, &suburbs, &mappings);
        tracing::debug!(
            requested,
            base_slug = %resolved.base_slug,
            suburb = ?resolved.suburb,
            "Resolved service slug"
        );
        resolved
    }

    /// Up to `limit` suburbs sharing `current`'s region and state.
    pub fn related_suburbs(
        &self,
        current: Option<&str>,
        limit: usize,
        order: RelatedOrder,
    ) -> Vec<RelatedSuburb> {
        related_suburbs(&self.suburbs(), current, limit, order)
    }

    fn load<T>(
        &self,
        path: &str,
        parse: fn(&str) -> Result<T, serde_json::Error>,
    ) -> Result<T, LocaleError>
    where
        T: Default,
    {
        let Some(storage) = &self.storage else {
            return Ok(T::default());
        };
        let json = storage.read(path)?;
        parse(&json).map_err(|source| LocaleError::Parse {
            path: path.to_owned(),
            source,
        })
    }
}

impl std::fmt::Debug for LookupTables {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LookupTables")
            .field("has_storage", &self.storage.is_some())
            .field("suburbs_loaded", &self.suburbs.read().is_ok_and(|s| s.is_some()))
            .field("mappings_loaded", &self.mappings.read().is_ok_and(|m| m.is_some()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use mdh_storage::{MockStorage, StorageErrorKind};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::suburb::State;

    const SUBURBS: &str = r#"{
        "bondi": {"state": "NSW", "region": "Eastern Suburbs"},
        "coogee": {"state": "NSW", "region": "Eastern Suburbs"},
        "gold-coast": {"state": "QLD", "region": "Gold Coast Region"}
    }"#;

    const MAPPINGS: &str = r#"{
        "disability-support-sydney": {"baseSlug": "disability-support", "defaultLocation": "sydney"}
    }"#;

    fn storage() -> Arc<MockStorage> {
        Arc::new(
            MockStorage::new()
                .with_file(SUBURBS_PATH, SUBURBS)
                .with_file(MAPPINGS_PATH, MAPPINGS),
        )
    }

    #[test]
    fn test_tables_load_once() {
        let storage = storage();
        let tables = LookupTables::new(Arc::clone(&storage) as Arc<dyn Storage>);

        for _ in 0..3 {
            tables.resolve_service_slug("respite-bondi");
        }

        assert_eq!(storage.read_count(SUBURBS_PATH), 1);
        assert_eq!(storage.read_count(MAPPINGS_PATH), 1);
    }

    #[test]
    fn test_reset_forces_reload() {
        let storage = storage();
        let tables = LookupTables::new(Arc::clone(&storage) as Arc<dyn Storage>);

        tables.suburbs();
        tables.reset();
        tables.suburbs();

        assert_eq!(storage.read_count(SUBURBS_PATH), 2);
    }

    #[test]
    fn test_edited_table_is_seen_only_after_reset() {
        let storage = storage();
        let tables = LookupTables::new(Arc::clone(&storage) as Arc<dyn Storage>);
        assert!(tables.suburb_info("manly").is_none());

        storage.set_file(
            SUBURBS_PATH,
            r#"{"manly": {"state": "NSW", "region": "Northern Beaches"}}"#,
        );
        assert!(tables.suburb_info("manly").is_none());

        tables.reset();
        assert_eq!(
            tables.suburb_info("manly").map(|info| info.region),
            Some("Northern Beaches".to_owned())
        );
        assert!(tables.suburb_info("bondi").is_none());
    }

    #[test]
    fn test_resolve_through_storage() {
        let tables = LookupTables::new(storage());

        assert_eq!(
            tables.resolve_service_slug("home-care-gold-coast"),
            ResolvedSlug {
                base_slug: "home-care".to_owned(),
                suburb: Some("gold-coast".to_owned()),
            }
        );
        assert_eq!(
            tables.resolve_service_slug("disability-support-sydney"),
            ResolvedSlug {
                base_slug: "disability-support".to_owned(),
                suburb: Some("sydney".to_owned()),
            }
        );
    }

    #[test]
    fn test_failed_suburb_load_disables_localization() {
        let storage = Arc::new(
            MockStorage::new()
                .with_file(MAPPINGS_PATH, MAPPINGS)
                .with_failure(SUBURBS_PATH, StorageErrorKind::Unavailable),
        );
        let tables = LookupTables::new(storage);

        assert_eq!(
            tables.resolve_service_slug("home-care-bondi"),
            ResolvedSlug::plain("home-care-bondi")
        );
        assert!(tables.suburb_info("bondi").is_none());
        assert!(
            tables
                .related_suburbs(Some("bondi"), 3, RelatedOrder::Insertion)
                .is_empty()
        );
    }

    #[test]
    fn test_failed_load_is_retried() {
        let storage = Arc::new(
            MockStorage::new()
                .with_file(SUBURBS_PATH, SUBURBS)
                .with_failure(SUBURBS_PATH, StorageErrorKind::Unavailable),
        );
        let tables = LookupTables::new(Arc::clone(&storage) as Arc<dyn Storage>);

        assert!(tables.suburbs().is_empty());

        storage.clear_failure(SUBURBS_PATH);
        assert_eq!(tables.suburbs().len(), 3);
        assert_eq!(storage.read_count(SUBURBS_PATH), 2);
    }

    #[test]
    fn test_malformed_table_is_empty() {
        let storage = Arc::new(
            MockStorage::new()
                .with_file(SUBURBS_PATH, "not json")
                .with_file(MAPPINGS_PATH, "[]"),
        );
        let tables = LookupTables::new(storage);

        assert!(tables.suburbs().is_empty());
        assert!(tables.mappings().is_empty());
    }

    #[test]
    fn test_missing_tables_resolve_to_self() {
        let tables = LookupTables::new(Arc::new(MockStorage::new()));

        assert_eq!(
            tables.resolve_service_slug("support-workers-in-bondi"),
            ResolvedSlug::plain("support-workers-in-bondi")
        );
    }

    #[test]
    fn test_from_parts() {
        let suburbs = SuburbTable::from_json(SUBURBS).unwrap();
        let tables = LookupTables::from_parts(suburbs, MappingTable::default());

        let info = tables.suburb_info("Gold-Coast").unwrap();
        assert_eq!(info.state, State::Qld);

        let related: Vec<_> = tables
            .related_suburbs(Some("bondi"), 3, RelatedOrder::Insertion)
            .into_iter()
            .map(|r| r.slug)
            .collect();
        assert_eq!(related, vec!["coogee".to_owned()]);
    }
}
