//! Localized service pages.
//!
//! A request slug such as `home-care-bondi` is resolved to a base service
//! (`home-care`) and a suburb (`bondi`). The base document is read from
//! `services/<base>.json` and, when the suburb is in the suburb table, its
//! copy is rewritten for that suburb.

use std::sync::Arc;

use mdh_locale::{Localizer, LookupTables, RelatedOrder, RelatedSuburb, ResolvedSlug, SuburbInfo};
use mdh_storage::Storage;
use serde::{Deserialize, Serialize};

use crate::error::{SiteError, read_json};

/// Service document as authored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    pub description: String,
    /// HTML body.
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub date: String,
}

/// A service ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServicePage {
    /// Service with localized title, description and content.
    pub service: Service,
    /// How the request slug was interpreted.
    pub resolved: ResolvedSlug,
    /// Suburb details, when the resolved suburb is in the table.
    pub suburb: Option<SuburbInfo>,
    /// Nearby suburbs to cross-link.
    pub related: Vec<RelatedSuburb>,
}

/// Loads service pages from storage.
pub struct ServiceCatalog {
    storage: Arc<dyn Storage>,
    tables: Arc<LookupTables>,
    localizer: Localizer,
    related_limit: usize,
    related_order: RelatedOrder,
}

impl ServiceCatalog {
    /// Related suburbs listed per page unless overridden.
    pub const DEFAULT_RELATED_LIMIT: usize = 3;

    #[must_use]
    pub fn new(storage: Arc<dyn Storage>, tables: Arc<LookupTables>) -> Self {
        Self {
            storage,
            tables,
            localizer: Localizer::default(),
            related_limit: Self::DEFAULT_RELATED_LIMIT,
            related_order: RelatedOrder::default(),
        }
    }

    /// Use `localizer` for placeholder defaults.
    #[must_use]
    pub fn with_localizer(mut self, localizer: Localizer) -> Self {
        self.localizer = localizer;
        self
    }

    /// Configure how many related suburbs are listed and in what order.
    #[must_use]
    pub fn with_related(mut self, limit: usize, order: RelatedOrder) -> Self {
        self.related_limit = limit;
        self.related_order = order;
        self
    }

    #[must_use]
    pub fn tables(&self) -> &LookupTables {
        &self.tables
    }

    /// Load and localize the service addressed by `slug`.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::NotFound`] if the base service document is
    /// missing, and [`SiteError::Parse`] if it is malformed.
    pub fn load(&self, slug: &str) -> Result<ServicePage, SiteError> {
        let resolved = self.tables.resolve_service_slug(slug);
        let suburb = resolved
            .suburb
            .as_deref()
            .and_then(|s| self.tables.suburb_info(s));

        let mut service: Service = read_json(
            self.storage.as_ref(),
            &service_key(&resolved.base_slug),
            "Service",
            slug,
        )?;

        // Without a known suburb only the placeholders are filled in.
        let (name, region, state) = match (resolved.suburb.as_deref(), &suburb) {
            (Some(name), Some(info)) => (
                Some(name),
                Some(info.region.as_str()),
                Some(info.state.abbreviation()),
            ),
            _ => (None, None, None),
        };
        let localize = |text: &str| self.localizer.localize(text, name, region, state);
        service.title = localize(&service.title);
        service.description = localize(&service.description);
        service.content = localize(&service.content);

        let related = if suburb.is_some() {
            self.tables.related_suburbs(
                resolved.suburb.as_deref(),
                self.related_limit,
                self.related_order,
            )
        } else {
            Vec::new()
        };

        tracing::debug!(
            slug,
            base_slug = %resolved.base_slug,
            localized = suburb.is_some(),
            "Loaded service page"
        );

        Ok(ServicePage {
            service,
            resolved,
            suburb,
            related,
        })
    }

    /// The base document for `base_slug`, exactly as authored.
    ///
    /// # Errors
    ///
    /// Same as [`ServiceCatalog::load`], with `base_slug` as the not-found slug.
    pub fn service(&self, base_slug: &str) -> Result<Service, SiteError> {
        read_json(
            self.storage.as_ref(),
            &service_key(base_slug),
            "Service",
            base_slug,
        )
    }

    /// Whether `services/<base_slug>.json` exists. Nothing is parsed.
    #[must_use]
    pub fn has_service(&self, base_slug: &str) -> bool {
        self.storage.exists(&service_key(base_slug))
    }

    /// Base service slugs with a document under `services/`, sorted.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Storage`] if the directory cannot be listed.
    pub fn base_slugs(&self) -> Result<Vec<String>, SiteError> {
        let keys = self.storage.list("services/*.json")?;
        Ok(keys
            .iter()
            .filter_map(|key| key.strip_prefix("services/")?.strip_suffix(".json"))
            .map(str::to_owned)
            .collect())
    }
}

fn service_key(base_slug: &str) -> String {
    format!("services/{base_slug}.json")
}

impl std::fmt::Debug for ServiceCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceCatalog")
            .field("tables", &self.tables)
            .field("localizer", &self.localizer)
            .field("related_limit", &self.related_limit)
            .field("related_order", &self.related_order)
            .finish_non_exhaustive()
    }
}
