//! Authoring checks for question graphs.

use std::collections::{HashMap, HashSet};
use std::fmt;

use crate::model::Question;

/// A problem found in an authored question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphIssue {
    /// The tool has a `questions` array with nothing in it.
    NoQuestions,
    /// Two questions share an id; only the first is reachable.
    DuplicateId { id: String },
    /// A question offers no options at all.
    NoOptions { question: String },
    /// An option names a question that doesn't exist.
    DanglingReference {
        question: String,
        option: String,
        target: String,
        /// Alias the target was translated from, if any.
        via_alias: Option<String>,
    },
    /// An alias table entry names a question this list doesn't have.
    UnknownAliasTarget { alias: String, target: String },
    /// An option has neither an outcome nor a next question.
    DeadEnd { question: String, option: String },
    /// No option chain from the first question leads here.
    Unreachable { question: String },
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoQuestions => write!(f, "question list is empty"),
            Self::DuplicateId { id } => write!(f, "duplicate question id '{id}'"),
            Self::NoOptions { question } => write!(f, "question '{question}' has no options"),
            Self::DanglingReference {
                question,
                option,
                target,
                via_alias: Some(alias),
            } => write!(
                f,
                "option '{question}/{option}' points to '{alias}' (alias of '{target}') which does not exist"
            ),
            Self::DanglingReference {
                question,
                option,
                target,
                via_alias: None,
            } => write!(
                f,
                "option '{question}/{option}' points to '{target}' which does not exist"
            ),
            Self::UnknownAliasTarget { alias, target } => {
                write!(f, "alias '{alias}' points to '{target}' which does not exist")
            }
            Self::DeadEnd { question, option } => write!(
                f,
                "option '{question}/{option}' has neither a result nor a next question"
            ),
            Self::Unreachable { question } => {
                write!(f, "question '{question}' cannot be reached from the first question")
            }
        }
    }
}

/// Check `questions` for authoring mistakes the navigator would paper over.
///
/// `aliases` is the same legacy → canonical table the navigator uses. Every
/// entry must name a question in `questions`, whether or not an option uses it.
#[must_use]
pub fn validate_questions(
    questions: &[Question],
    aliases: &HashMap<String, String>,
) -> Vec<GraphIssue> {
    let Some(first) = questions.first() else {
        return vec![GraphIssue::NoQuestions];
    };

    let mut issues = Vec::new();
    let mut ids = HashSet::new();
    for question in questions {
        if !ids.insert(question.id.as_str()) {
            issues.push(GraphIssue::DuplicateId {
                id: question.id.clone(),
            });
        }
    }

    let mut unknown_aliases: Vec<_> = aliases
        .iter()
        .filter(|(_, target)| !ids.contains(target.as_str()))
        .collect();
    unknown_aliases.sort();
    for (alias, target) in unknown_aliases {
        issues.push(GraphIssue::UnknownAliasTarget {
            alias: alias.clone(),
            target: target.clone(),
        });
    }

    let resolve = |target: &str| -> String {
        aliases
            .get(target)
            .cloned()
            .unwrap_or_else(|| target.to_owned())
    };

    for question in questions {
        if question.options.is_empty() {
            issues.push(GraphIssue::NoOptions {
                question: question.id.clone(),
            });
        }
        for choice in &question.options {
            match (&choice.result, &choice.next_question) {
                (Some(_), _) => {}
                (None, Some(target)) => {
                    let resolved = resolve(target);
                    if !ids.contains(resolved.as_str()) {
                        let via_alias = (resolved != *target).then(|| target.clone());
                        issues.push(GraphIssue::DanglingReference {
                            question: question.id.clone(),
                            option: choice.value.clone(),
                            target: resolved,
                            via_alias,
                        });
                    }
                }
                (None, None) => issues.push(GraphIssue::DeadEnd {
                    question: question.id.clone(),
                    option: choice.value.clone(),
                }),
            }
        }
    }

    let mut reachable = HashSet::from([first.id.as_str()]);
    let mut pending = vec![first];
    while let Some(question) = pending.pop() {
        for choice in &question.options {
            if choice.result.is_some() {
                continue;
            }
            let Some(target) = &choice.next_question else {
                continue;
            };
            let resolved = resolve(target);
            if let Some(next) = questions.iter().find(|q| q.id == resolved)
                && reachable.insert(next.id.as_str())
            {
                pending.push(next);
            }
        }
    }

    let mut reported = HashSet::new();
    for question in questions {
        if !reachable.contains(question.id.as_str()) && reported.insert(question.id.as_str()) {
            issues.push(GraphIssue::Unreachable {
                question: question.id.clone(),
            });
        }
    }

    issues
}
