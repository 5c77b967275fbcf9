//! Tool index browsing: category tabs and search.

use indexmap::IndexSet;

use crate::model::ToolSummary;

/// Pseudo-category that matches every tool.
pub const ALL_CATEGORY: &str = "All";

/// URL form of a category name: lower-cased, whitespace runs become `-`.
#[must_use]
pub fn category_slug(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

/// Tool summaries in index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolCatalog {
    tools: Vec<ToolSummary>,
}

impl ToolCatalog {
    #[must_use]
    pub fn new(tools: Vec<ToolSummary>) -> Self {
        Self { tools }
    }

    #[must_use]
    pub fn tools(&self) -> &[ToolSummary] {
        &self.tools
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// [`ALL_CATEGORY`] followed by each distinct category in first-seen order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = IndexSet::new();
        seen.insert(ALL_CATEGORY);
        for tool in &self.tools {
            seen.insert(tool.category.as_str());
        }
        seen.into_iter().collect()
    }

    /// Category whose slug is `slug`. `None` when nothing matches.
    #[must_use]
    pub fn category_from_slug(&self, slug: &str) -> Option<&str> {
        self.categories()
            .into_iter()
            .find(|category| category_slug(category) == slug)
    }

    /// Tools in `category` (or all, for `None` / [`ALL_CATEGORY`]) whose title
    /// or description contains `search`, case-insensitively.
    #[must_use]
    pub fn filter(&self, category: Option<&str>, search: &str) -> Vec<&ToolSummary> {
        let category = category.filter(|c| *c != ALL_CATEGORY);
        let needle = search.trim().to_lowercase();

        self.tools
            .iter()
            .filter(|tool| category.is_none_or(|c| tool.category == c))
            .filter(|tool| {
                needle.is_empty()
                    || tool.title.to_lowercase().contains(&needle)
                    || tool.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

impl FromIterator<ToolSummary> for ToolCatalog {
    fn from_iter<I: IntoIterator<Item = ToolSummary>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
