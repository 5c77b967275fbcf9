//! `mdh budget` command implementation.

use clap::Args;
use mdh_tools::{BudgetNavigator, ToolData};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the budget command.
#[derive(Args)]
pub(crate) struct BudgetArgs {
    /// Tool slug (e.g. `ndis-budget-explorer`).
    tool: String,

    /// Goal id to select (repeatable).
    #[arg(short, long = "goal", required = true)]
    goals: Vec<String>,
}

impl BudgetArgs {
    /// Execute the budget command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let ctx = global.context(None)?;
        let tool = ctx.tools().load(&self.tool)?;

        let navigator = summarize(&tool, &self.goals)?;
        output.highlight(&ctx.title(&tool.title));
        output.field("Goals", &goal_labels(&navigator).join(", "));

        for section in &navigator.explorer().sections {
            let subcategories = navigator.visible_subcategories(section);
            if subcategories.is_empty() {
                continue;
            }
            output.separator();
            output.highlight(&section.title);
            for subcategory in subcategories {
                output.info(&subcategory.title);
                for support in navigator.visible_supports(subcategory) {
                    output.success(&format!("  {}", support.title));
                    if !support.budget_category.is_empty() {
                        output.field("    Budget", &support.budget_category);
                    }
                }
            }
        }
        if navigator.eligible_supports().is_empty() {
            output.warning("No supports match the selected goals");
        }
        Ok(())
    }
}

/// Select `goals` and walk through every section to the summary.
fn summarize(tool: &ToolData, goals: &[String]) -> Result<BudgetNavigator, CliError> {
    let explorer = tool.budget_explorer.clone().ok_or_else(|| {
        CliError::Validation(format!("Tool '{}' has no budget explorer", tool.slug))
    })?;
    let mut navigator = BudgetNavigator::new(explorer)?;
    for goal in goals {
        navigator.toggle_goal(goal)?;
    }
    while !navigator.is_showing_eligible() {
        navigator.next()?;
    }
    Ok(navigator)
}

fn goal_labels(navigator: &BudgetNavigator) -> Vec<String> {
    let goals = &navigator.explorer().sections[0].questions;
    navigator
        .selected_goals()
        .iter()
        .map(|id| {
            goals
                .iter()
                .find(|goal| &goal.id == id)
                .map_or_else(|| id.clone(), |goal| goal.text.clone())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use mdh_tools::BudgetError;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::commands::test_support::{context, storage};

    fn explorer_tool() -> ToolData {
        context(storage()).tools().load("budget-explorer").unwrap()
    }

    fn goals(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|id| (*id).to_owned()).collect()
    }

    #[test]
    fn test_summarize_selected_goals() {
        let navigator = summarize(&explorer_tool(), &goals(&["social"])).unwrap();

        assert!(navigator.is_showing_eligible());
        assert_eq!(
            navigator
                .eligible_supports()
                .iter()
                .map(|s| s.id.as_str())
                .collect::<Vec<_>>(),
            vec!["outings"]
        );
        assert_eq!(goal_labels(&navigator), vec!["Join the community"]);
    }

    #[test]
    fn test_summarize_requires_goals() {
        let err = summarize(&explorer_tool(), &[]).unwrap_err();

        assert!(matches!(err, CliError::Budget(BudgetError::NoGoalsSelected)));
    }

    #[test]
    fn test_summarize_unknown_goal() {
        let err = summarize(&explorer_tool(), &goals(&["fame"])).unwrap_err();

        assert_eq!(err.to_string(), "Unknown goal 'fame'");
    }
}
