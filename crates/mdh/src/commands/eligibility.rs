//! `mdh eligibility` command implementation.
//!
//! Replays a sequence of answers through a tool's questionnaire.

use std::collections::HashMap;

use clap::Args;
use mdh_tools::{NavState, QuestionNavigator, ToolData};

use super::GlobalArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the eligibility command.
#[derive(Args)]
pub(crate) struct EligibilityArgs {
    /// Tool slug (e.g. `ndis-eligibility-checker`).
    tool: String,

    /// Option value to select, in question order (repeatable).
    #[arg(short, long = "answer")]
    answers: Vec<String>,

    /// Request the checklist for this address once an outcome is reached.
    #[arg(long)]
    email: Option<String>,
}

impl EligibilityArgs {
    /// Execute the eligibility command.
    pub(crate) fn execute(self, global: &GlobalArgs) -> Result<(), CliError> {
        let output = Output::new();
        let ctx = global.context(None)?;
        let tool = ctx.tools().load(&self.tool)?;

        let mut navigator = walk(&tool, &ctx.aliases(), &self.answers)?;
        output.highlight(&ctx.title(&tool.title));

        match navigator.state().clone() {
            NavState::Empty => output.warning("This tool has no questions"),
            NavState::Stalled => {
                output.warning("The questionnaire could not continue; please contact us");
            }
            NavState::Asking { .. } => {
                if let Some(question) = navigator.current_question() {
                    let progress = navigator.progress().unwrap_or_default();
                    output.info(&format!(
                        "Question {progress} of {}: {}",
                        navigator.total(),
                        question.text
                    ));
                    for choice in &question.options {
                        output.info(&format!("  {} ({})", choice.label, choice.value));
                    }
                }
            }
            NavState::ShowingResult(outcome) => {
                output.field("Eligibility", outcome.eligible.as_str());
                output.success(&outcome.title);
                output.info(&outcome.message);
                if !outcome.next_steps.is_empty() {
                    output.separator();
                    output.info(&outcome.next_steps);
                }
                if let Some(email) = &self.email {
                    navigator.submit_email(email)?;
                    output.success("Your checklist is on its way");
                } else if navigator.email_capture().is_some() {
                    output.info("Pass --email to receive a personalised checklist");
                }
            }
        }
        Ok(())
    }
}

/// Build a navigator for `tool` and select each answer in turn.
fn walk(
    tool: &ToolData,
    aliases: &HashMap<String, String>,
    answers: &[String],
) -> Result<QuestionNavigator, CliError> {
    let questions = tool.questions.clone().ok_or_else(|| {
        CliError::Validation(format!("Tool '{}' has no questionnaire", tool.slug))
    })?;
    let mut navigator = QuestionNavigator::new(questions).with_aliases(aliases.clone());
    for answer in answers {
        navigator.select(answer)?;
    }
    Ok(navigator)
}
