//! Tool document model.
//!
//! Mirrors the JSON authored under `tools/`: the tool index, per-tool
//! documents, eligibility questions and the budget explorer.

use serde::{Deserialize, Serialize};

/// Entry of the `tools/tools.json` index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSummary {
    /// Display title.
    pub title: String,
    /// Document name under `tools/`, without `.json`.
    pub slug: String,
    /// Card blurb.
    pub description: String,
    /// Card image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category name the catalogue groups by.
    pub category: String,
}

/// Full tool document (`tools/<slug>.json`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolData {
    /// Display title.
    pub title: String,
    /// Same slug as the index entry.
    pub slug: String,
    /// Meta description.
    pub description: String,
    /// Hero image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Category name, empty if unset.
    #[serde(default)]
    pub category: String,
    /// JSON-LD structured data, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<serde_json::Value>,
    /// Eligibility questionnaire, first question first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<Question>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta_info: Option<MetaInfo>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo_content: Option<SeoContent>,
    /// Present on budget explorer tools only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub budget_explorer: Option<BudgetExplorer>,
}

/// SEO keywords.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetaInfo {
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// Long-form SEO copy shown around a tool.
///
/// Only the sections every tool carries are typed; tool-specific sections
/// (budget categories, evidence guides, ...) are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoContent {
    /// Opening HTML paragraph.
    pub introduction: String,
    #[serde(default)]
    pub table_of_contents: Vec<TocEntry>,
    /// Bullet list shown beside the introduction.
    #[serde(default)]
    pub key_facts: Vec<String>,
    #[serde(default)]
    pub next_steps: Vec<TitledText>,
    /// Call-to-action heading.
    #[serde(default)]
    pub cta_title: String,
    /// Call-to-action body.
    #[serde(default)]
    pub cta_description: String,
    /// Sections specific to one tool, keyed by their JSON name.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Table-of-contents anchor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TocEntry {
    /// Anchor id without the `#`.
    pub id: String,
    /// Link text.
    pub text: String,
}

/// Title plus description pair used throughout the SEO copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitledText {
    pub title: String,
    pub description: String,
}

/// One multiple-choice question of the eligibility checker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// Target of `nextQuestion` references.
    pub id: String,
    /// Question as shown to the visitor.
    pub text: String,
    /// Input style (`radio`), rendering hint only.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Answers in display order.
    pub options: Vec<Choice>,
    /// Illustration URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Question {
    /// Option with the given value.
    #[must_use]
    pub fn choice(&self, value: &str) -> Option<&Choice> {
        self.options.iter().find(|choice| choice.value == value)
    }
}

/// An answer option; leads either to another question or to an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Choice {
    /// Value recorded in the answer set.
    pub value: String,
    /// Button text.
    pub label: String,
    /// Question id or alias to go to. Ignored when `result` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_question: Option<String>,
    /// Ends the questionnaire here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<Outcome>,
}

/// Eligibility classification of a terminal outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Eligibility {
    Yes,
    No,
    Likely,
    Unlikely,
    Maybe,
}

impl Eligibility {
    /// Whether this outcome offers the email checklist.
    #[must_use]
    pub fn offers_email_capture(self) -> bool {
        matches!(self, Self::Likely | Self::Maybe)
    }

    /// Lower-case label as authored.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
            Self::Likely => "likely",
            Self::Unlikely => "unlikely",
            Self::Maybe => "maybe",
        }
    }
}

impl std::fmt::Display for Eligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal node of the question tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Outcome {
    pub eligible: Eligibility,
    /// Result heading.
    pub title: String,
    /// Short explanation.
    pub message: String,
    /// HTML describing what to do next.
    #[serde(default)]
    pub next_steps: String,
    /// Result illustration URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Budget-category explorer definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetExplorer {
    /// Shown above the first section.
    #[serde(default)]
    pub intro_text: String,
    /// Steps in order; the first one holds the goals.
    pub sections: Vec<BudgetSection>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_image: Option<String>,
}

/// One step of the budget explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetSection {
    pub id: String,
    /// Section heading.
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Section illustration URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Goal checkboxes (first section only).
    #[serde(default)]
    pub questions: Vec<GoalQuestion>,
    /// Support groups (every section after the first).
    #[serde(default)]
    pub subcategories: Vec<Subcategory>,
}

/// A selectable goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalQuestion {
    /// Goal id that supports list in `relatedGoals`.
    pub id: String,
    /// Checkbox label.
    pub text: String,
    /// Input style (`checkbox`), rendering hint only.
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Tooltip text.
    #[serde(default)]
    pub info: String,
}

/// Group of supports within a budget section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subcategory {
    pub id: String,
    /// Group heading.
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub supports: Vec<Support>,
}

/// A fundable support, tagged with the goals it serves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Support {
    pub id: String,
    /// Support name.
    pub title: String,
    /// What the support pays for.
    #[serde(default)]
    pub description: String,
    /// Who can claim it, as authored HTML or text.
    #[serde(default)]
    pub eligibility_criteria: String,
    /// Documents a plan reviewer expects.
    #[serde(default)]
    pub evidence_required: String,
    /// Goal ids that make this support visible.
    #[serde(default)]
    pub related_goals: Vec<String>,
    /// NDIS budget it is funded from, e.g. "Core".
    #[serde(default)]
    pub budget_category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}
