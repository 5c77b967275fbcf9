//! `mdh tools` command implementation.

use clap::Args;
use mdh_tools::{ToolCatalog, ToolSummary};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the tools command.
#[derive(Args)]
pub(crate) struct ToolsArgs {
    /// Category name or slug (e.g. `ndis-planning`).
    #[arg(long)]
    category: Option<String>,

    /// Case-insensitive search over titles and descriptions.
    #[arg(long, default_value = "")]
    search: String,
}

impl ToolsArgs {
    /// Execute the tools command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let ctx = global.context(None)?;
        let catalog = ctx.tools().catalog();

        output.field("Categories", &catalog.categories().join(", "));
        let matches = filter(&catalog, self.category.as_deref(), &self.search);
        if matches.is_empty() {
            output.warning("No tools match");
        }
        for tool in matches {
            output.info(&format!("{} [{}] ({})", tool.title, tool.category, tool.slug));
        }
        Ok(())
    }
}

/// Filter by a category given either by name or by slug.
fn filter<'a>(
    catalog: &'a ToolCatalog,
    category: Option<&str>,
    search: &str,
) -> Vec<&'a ToolSummary> {
    let category = category.map(|c| catalog.category_from_slug(c).unwrap_or(c));
    catalog.filter(category, search)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::test_support::{context, storage};

    fn slugs(tools: &[&ToolSummary]) -> Vec<String> {
        tools.iter().map(|t| t.slug.clone()).collect()
    }

    #[test]
    fn test_filter_by_category_slug_or_name() {
        let catalog = context(storage()).tools().catalog();

        assert_eq!(
            slugs(&filter(&catalog, Some("ndis-planning"), "")),
            vec!["budget-explorer"]
        );
        assert_eq!(
            slugs(&filter(&catalog, Some("NDIS"), "")),
            vec!["ndis-eligibility-checker"]
        );
        assert_eq!(filter(&catalog, Some("all"), "").len(), 2);
    }

    #[test]
    fn test_filter_by_search() {
        let catalog = context(storage()).tools().catalog();

        assert_eq!(
            slugs(&filter(&catalog, None, "qualify")),
            vec!["ndis-eligibility-checker"]
        );
    }
}
