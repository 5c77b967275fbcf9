//! Suburb lookup, service slug resolution and content localization.
//!
//! Service pages are published once per service and localized per suburb by
//! URL: `/services/home-care-bondi` renders the `home-care` document rewritten
//! for Bondi. This crate provides:
//!
//! - [`LookupTables`]: load-once access to the suburb and service-mapping tables
//! - [`resolve_slug`] / [`LookupTables::resolve_service_slug`]: split a slug
//!   into a base service and an optional suburb
//! - [`Localizer`] / [`localize_content`]: rewrite authored copy for a suburb
//! - [`related_suburbs`]: nearby suburbs for cross-linking
//!
//! # Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use mdh_locale::LookupTables;
//! use mdh_storage::FsStorage;
//!
//! let tables = LookupTables::new(Arc::new(FsStorage::new("public/data".into())));
//! let resolved = tables.resolve_service_slug("home-care-gold-coast");
//! assert_eq!(resolved.base_slug, "home-care");
//! ```

mod error;
mod localize;
mod mapping;
mod related;
mod resolve;
mod suburb;
mod tables;

pub use error::LocaleError;
pub use localize::{Localizer, MAJOR_CITIES, REGION_PHRASES, display_name, localize_content};
pub use mapping::{MappingTable, ServiceMapping};
pub use related::{RelatedOrder, RelatedSuburb, related_suburbs};
pub use resolve::{ResolvedSlug, SUPPORT_WORKERS_PREFIX, SUPPORT_WORKERS_SLUG, resolve_slug};
pub use suburb::{State, SuburbInfo, SuburbTable};
pub use tables::{LookupTables, MAPPINGS_PATH, SUBURBS_PATH};
