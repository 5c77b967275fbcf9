//! Service slug resolution.
//!
//! A requested slug is resolved in three steps:
//!
//! 1. An exact key of the [`MappingTable`] wins outright.
//! 2. `support-workers-in-<suburb>` resolves to the `support-workers` service.
//! 3. A trailing one- or two-token suburb is split off the slug.
//!
//! Anything else is a plain, non-localized service slug.

use serde::Serialize;

use crate::mapping::MappingTable;
use crate::suburb::SuburbTable;

/// Prefix of the support-worker landing pages.
pub const SUPPORT_WORKERS_PREFIX: &str = "support-workers-in-";

/// Base slug the support-worker landing pages resolve to.
pub const SUPPORT_WORKERS_SLUG: &str = "support-workers";

/// Longest suburb name, in hyphen tokens, recognised at the end of a slug.
const MAX_SUBURB_TOKENS: usize = 2;

/// A requested slug split into its service and location parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedSlug {
    /// Canonical, suburb-independent service identifier.
    pub base_slug: String,
    /// Suburb slug, if the requested slug carried one.
    pub suburb: Option<String>,
}

impl ResolvedSlug {
    /// A slug with no location part.
    #[must_use]
    pub fn plain(slug: &str) -> Self {
        Self {
            base_slug: slug.to_owned(),
            suburb: None,
        }
    }

    fn localized(base_slug: impl Into<String>, suburb: impl Into<String>) -> Self {
        Self {
            base_slug: base_slug.into(),
            suburb: Some(suburb.into()),
        }
    }
}

/// Resolve `requested` against already-loaded tables.
///
/// Empty tables resolve every slug to itself with no suburb.
#[must_use]
pub fn resolve_slug(
    requested: &str,
    suburbs: &SuburbTable,
    mappings: &MappingTable,
) -> ResolvedSlug {
    if let Some(mapping) = mappings.get(requested) {
        return ResolvedSlug::localized(&mapping.base_slug, &mapping.default_location);
    }

    if let Some(remainder) = requested.strip_prefix(SUPPORT_WORKERS_PREFIX) {
        let tokens = remainder.split('-').count();
        let candidate = remainder.to_lowercase();
        if (1..=MAX_SUBURB_TOKENS).contains(&tokens) && suburbs.contains(&candidate) {
            return ResolvedSlug::localized(SUPPORT_WORKERS_SLUG, candidate);
        }
    }

    parse_localized_slug(requested, suburbs)
}

/// Split a trailing suburb off `slug`.
///
/// The two-token candidate is tried before the single-token one so that
/// `home-care-north-sydney` resolves to `north-sydney` even when `sydney` is
/// also a known suburb. The base part must keep at least one token.
fn parse_localized_slug(slug: &str, suburbs: &SuburbTable) -> ResolvedSlug {
    let tokens: Vec<&str> = slug.split('-').collect();

    for width in (1..=MAX_SUBURB_TOKENS).rev() {
        if tokens.len() <= width {
            continue;
        }
        let split = tokens.len() - width;
        let candidate = tokens[split..].join("-").to_lowercase();
        if suburbs.contains(&candidate) {
            return ResolvedSlug::localized(tokens[..split].join("-"), candidate);
        }
    }

    ResolvedSlug::plain(slug)
}
