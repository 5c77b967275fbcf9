//! Related suburbs for cross-linking localized pages.

use serde::Serialize;

use crate::localize::display_name;
use crate::suburb::SuburbTable;

/// A suburb link target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelatedSuburb {
    /// Suburb slug.
    pub slug: String,
    /// Display name ("Gold Coast").
    pub name: String,
}

/// Ordering applied before truncating to the limit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RelatedOrder {
    /// Suburb table order.
    #[default]
    Insertion,
    /// Alphabetical by display name.
    Alphabetical,
}

/// Up to `limit` other suburbs sharing `current`'s region and state.
///
/// Returns an empty list when `current` is `None` or not in the table.
#[must_use]
pub fn related_suburbs(
    table: &SuburbTable,
    current: Option<&str>,
    limit: usize,
    order: RelatedOrder,
) -> Vec<RelatedSuburb> {
    let Some(current) = current.map(str::to_lowercase) else {
        return Vec::new();
    };
    let Some(info) = table.get(&current) else {
        return Vec::new();
    };

    let mut related: Vec<RelatedSuburb> = table
        .iter()
        .filter(|(slug, other)| {
            *slug != current && other.state == info.state && other.region == info.region
        })
        .map(|(slug, _)| RelatedSuburb {
            slug: slug.to_owned(),
            name: display_name(slug),
        })
        .collect();

    if order == RelatedOrder::Alphabetical {
        related.sort_by(|a, b| a.name.cmp(&b.name));
    }
    related.truncate(limit);
    related
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::suburb::{State, SuburbInfo};

    fn table() -> SuburbTable {
        [
            ("bondi", State::Nsw, "Eastern Suburbs"),
            ("randwick", State::Nsw, "Eastern Suburbs"),
            ("coogee", State::Nsw, "Eastern Suburbs"),
            ("parramatta", State::Nsw, "Greater Sydney"),
            ("bronte", State::Nsw, "Eastern Suburbs"),
            ("double-bay", State::Nsw, "Eastern Suburbs"),
            ("eastern-beach", State::Vic, "Eastern Suburbs"),
        ]
        .into_iter()
        .map(|(slug, state, region)| {
            (
                slug,
                SuburbInfo {
                    state,
                    region: region.to_owned(),
                },
            )
        })
        .collect()
    }

    fn slugs(related: &[RelatedSuburb]) -> Vec<&str> {
        related.iter().map(|r| r.slug.as_str()).collect()
    }

    #[test]
    fn test_related_in_table_order() {
        let related = related_suburbs(&table(), Some("bondi"), 3, RelatedOrder::Insertion);

        assert_eq!(slugs(&related), vec!["randwick", "coogee", "bronte"]);
    }

    #[test]
    fn test_related_alphabetical() {
        let related = related_suburbs(&table(), Some("bondi"), 3, RelatedOrder::Alphabetical);

        assert_eq!(slugs(&related), vec!["bronte", "coogee", "double-bay"]);
        assert_eq!(related[2].name, "Double Bay");
    }

    #[test]
    fn test_related_excludes_self_and_other_state() {
        let related = related_suburbs(&table(), Some("bondi"), 10, RelatedOrder::Insertion);

        assert!(related.len() <= 10);
        assert!(related.iter().all(|r| r.slug != "bondi"));
        assert!(related.iter().all(|r| r.slug != "eastern-beach"));
        assert!(related.iter().all(|r| r.slug != "parramatta"));
        assert_eq!(related.len(), 4);
    }

    #[test]
    fn test_related_unknown_or_missing() {
        assert!(related_suburbs(&table(), None, 3, RelatedOrder::Insertion).is_empty());
        assert!(
            related_suburbs(&table(), Some("atlantis"), 3, RelatedOrder::Insertion).is_empty()
        );
    }

    #[test]
    fn test_related_lone_suburb() {
        assert!(related_suburbs(&table(), Some("parramatta"), 3, RelatedOrder::Insertion).is_empty());
    }

    #[test]
    fn test_related_current_case_insensitive() {
        let related = related_suburbs(&table(), Some("Bondi"), 1, RelatedOrder::Insertion);

        assert_eq!(slugs(&related), vec!["randwick"]);
    }
}
