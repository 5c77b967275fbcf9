//! `mdh check` command implementation.
//!
//! Cross-checks the data directory: lookup tables, the service document
//! behind every mapping, each service document's shape, tool documents with
//! their question graphs, and blog slugs.

use std::collections::{HashMap, HashSet};

use clap::Args;
use mdh_tools::{BudgetExplorer, validate_questions};

use super::{Context, GlobalArgs};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    /// Fail on any finding (overrides `questions.strict`).
    #[arg(long)]
    strict: bool,
}

/// One problem found in the data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Finding {
    /// Where the problem lives (`tools/<slug>.json`, ...).
    scope: String,
    message: String,
}

impl Finding {
    fn new(scope: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            message: message.into(),
        }
    }
}

impl CheckArgs {
    /// Execute the check command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let ctx = global.context(None)?;
        let strict = self.strict || ctx.config().questions.strict;

        let findings = run_checks(&ctx);
        for finding in &findings {
            output.warning(&format!("{}: {}", finding.scope, finding.message));
        }

        if findings.is_empty() {
            output.success("No problems found");
            return Ok(());
        }
        let summary = format!("{} problem(s) found", findings.len());
        if strict {
            return Err(CliError::Validation(summary));
        }
        output.info(&summary);
        Ok(())
    }
}

fn run_checks(ctx: &Context) -> Vec<Finding> {
    let mut findings = Vec::new();
    check_tables(ctx, &mut findings);
    check_services(ctx, &mut findings);
    check_tools(ctx, &mut findings);
    check_blog(ctx, &mut findings);
    findings
}

fn check_tables(ctx: &Context, findings: &mut Vec<Finding>) {
    if ctx.tables().suburbs().is_empty() {
        findings.push(Finding::new(
            mdh_locale::SUBURBS_PATH,
            "suburb table is empty or unreadable",
        ));
    }

    let services = ctx.services();
    let mut missing: Vec<_> = ctx
        .tables()
        .mappings()
        .iter()
        .filter(|(_, mapping)| !services.has_service(&mapping.base_slug))
        .map(|(slug, mapping)| (slug.to_owned(), mapping.base_slug.clone()))
        .collect();
    missing.sort();
    for (slug, base) in missing {
        findings.push(Finding::new(
            mdh_locale::MAPPINGS_PATH,
            format!("'{slug}' maps to '{base}', which has no services/{base}.json"),
        ));
    }
}

fn check_services(ctx: &Context, findings: &mut Vec<Finding>) {
    let services = ctx.services();
    let slugs = match services.base_slugs() {
        Ok(slugs) => slugs,
        Err(e) => {
            findings.push(Finding::new("services/", e.to_string()));
            return;
        }
    };
    for base in slugs {
        if let Err(e) = services.service(&base) {
            findings.push(Finding::new(format!("services/{base}.json"), e.to_string()));
        }
    }
}

fn check_tools(ctx: &Context, findings: &mut Vec<Finding>) {
    let library = ctx.tools();
    let aliases = ctx.aliases();

    for summary in library.index() {
        let scope = format!("tools/{}.json", summary.slug);
        let tool = match library.load(&summary.slug) {
            Ok(tool) => tool,
            Err(e) => {
                findings.push(Finding::new(scope, e.to_string()));
                continue;
            }
        };
        if let Some(questions) = &tool.questions {
            findings.extend(
                validate_questions(questions, &aliases)
                    .into_iter()
                    .map(|issue| Finding::new(scope.clone(), issue.to_string())),
            );
        }
        if let Some(explorer) = &tool.budget_explorer {
            check_explorer(&scope, explorer, findings);
        }
    }
}

fn check_explorer(scope: &str, explorer: &BudgetExplorer, findings: &mut Vec<Finding>) {
    let Some(goal_section) = explorer.sections.first() else {
        findings.push(Finding::new(scope, "budget explorer has no sections"));
        return;
    };
    if goal_section.questions.is_empty() {
        findings.push(Finding::new(
            scope,
            format!("goal section '{}' has no goals", goal_section.id),
        ));
    }

    let goals: HashSet<_> = goal_section.questions.iter().map(|q| q.id.as_str()).collect();
    let supports = explorer
        .sections
        .iter()
        .flat_map(|section| &section.subcategories)
        .flat_map(|sub| &sub.supports);
    for support in supports {
        for goal in &support.related_goals {
            if !goals.contains(goal.as_str()) {
                findings.push(Finding::new(
                    scope,
                    format!("support '{}' relates to unknown goal '{goal}'", support.id),
                ));
            }
        }
    }
}

fn check_blog(ctx: &Context, findings: &mut Vec<Finding>) {
    let mut seen: HashMap<String, String> = HashMap::new();
    for post in ctx.blog().posts() {
        let slug = post.url_slug();
        if let Some(other) = seen.insert(slug.clone(), post.title.clone()) {
            findings.push(Finding::new(
                mdh_site::POSTS_PATH,
                format!("'{}' and '{other}' share the slug '{slug}'", post.title),
            ));
        }
    }
}
