//! Suburb localization of authored copy.
//!
//! Service copy is written once, usually naming a capital city, and carries
//! `{suburb}`, `{region}` and `{state}` placeholder tokens. Localizing runs two
//! passes:
//!
//! 1. One regex pass over the authored text rewrites region phrases
//!    ("Greater Sydney", "Top End", ...) to the region and bare capital-city
//!    names to the suburb. A single pass means a region phrase is never half
//!    rewritten by the city rule.
//! 2. Placeholder tokens are substituted, so injected values are never
//!    rewritten by pass 1.

use std::sync::LazyLock;

use regex::{Captures, Regex};

/// Capital cities rewritten to the suburb name.
pub const MAJOR_CITIES: [&str; 8] = [
    "Sydney",
    "Melbourne",
    "Brisbane",
    "Perth",
    "Adelaide",
    "Hobart",
    "Darwin",
    "Canberra",
];

/// Region phrases rewritten to the suburb's region.
pub const REGION_PHRASES: [&str; 8] = [
    "Greater Sydney",
    "Greater Melbourne",
    "Greater Brisbane",
    "Greater Perth",
    "Greater Adelaide",
    "Greater Hobart",
    "Top End",
    "Capital Region",
];

const SUBURB_TOKEN: &str = "{suburb}";
const REGION_TOKEN: &str = "{region}";
const STATE_TOKEN: &str = "{state}";

/// Fallback for placeholders when no location is known.
const DEFAULT_LOCATION: &str = "Australia";

/// Region phrases and city names as one alternation; region phrases come
/// first so "Greater Sydney" matches as a whole.
static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    let regions = REGION_PHRASES.map(regex::escape).join("|");
    let cities = MAJOR_CITIES.map(regex::escape).join("|");
    Regex::new(&format!(r"\b(?:(?P<region>{regions})|(?P<city>{cities}))\b")).unwrap()
});

/// Render a suburb slug for display: `gold-coast` → `Gold Coast`.
#[must_use]
pub fn display_name(slug: &str) -> String {
    slug.split('-')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Rewrites authored copy for a location.
#[derive(Debug, Clone)]
pub struct Localizer {
    default_location: String,
}

impl Default for Localizer {
    fn default() -> Self {
        Self::new(DEFAULT_LOCATION)
    }
}

impl Localizer {
    /// Create a localizer substituting `default_location` for missing values.
    #[must_use]
    pub fn new(default_location: impl Into<String>) -> Self {
        Self {
            default_location: default_location.into(),
        }
    }

    /// Value used for placeholders when no location is supplied.
    #[must_use]
    pub fn default_location(&self) -> &str {
        &self.default_location
    }

    /// Localize `content` for an optional suburb, region and state.
    ///
    /// City names are rewritten only when a suburb is given, and region
    /// phrases only when a region is given; generic copy is otherwise left
    /// untouched apart from placeholder substitution.
    #[must_use]
    pub fn localize(
        &self,
        content: &str,
        suburb: Option<&str>,
        region: Option<&str>,
        state: Option<&str>,
    ) -> String {
        let suburb_name = suburb.map(display_name);

        let rewritten = if suburb_name.is_some() || region.is_some() {
            LOCATION_RE
                .replace_all(content, |caps: &Captures<'_>| {
                    let replacement = if caps.name("region").is_some() {
                        region
                    } else {
                        suburb_name.as_deref()
                    };
                    replacement.unwrap_or(&caps[0]).to_owned()
                })
                .into_owned()
        } else {
            content.to_owned()
        };

        let default = self.default_location.as_str();
        rewritten
            .replace(SUBURB_TOKEN, suburb_name.as_deref().unwrap_or(default))
            .replace(REGION_TOKEN, region.unwrap_or(default))
            .replace(STATE_TOKEN, state.unwrap_or(default))
    }
}

/// Localize `content` with the default "Australia" fallback.
///
/// See [`Localizer::localize`].
#[must_use]
pub fn localize_content(
    content: &str,
    suburb: Option<&str>,
    region: Option<&str>,
    state: Option<&str>,
) -> String {
    Localizer::default().localize(content, suburb, region, state)
}
