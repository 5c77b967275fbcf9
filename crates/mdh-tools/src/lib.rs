//! Interactive tools of the site.
//!
//! Both widgets are plain state machines over deserialized tool documents:
//!
//! - [`QuestionNavigator`]: the eligibility questionnaire, with its
//!   [`EmailCapture`] sub-flow
//! - [`BudgetNavigator`]: the budget-category explorer
//!
//! [`validate_questions`] checks question graphs at authoring time and
//! [`ToolCatalog`] backs the tools index page.

mod budget;
mod catalog;
mod email;
mod model;
mod navigator;
mod validate;

pub use budget::{BudgetError, BudgetNavigator};
pub use catalog::{ALL_CATEGORY, ToolCatalog, category_slug};
pub use email::{EmailCapture, EmailError, is_valid_email};
pub use model::{
    BudgetExplorer, BudgetSection, Choice, Eligibility, GoalQuestion, MetaInfo, Outcome, Question,
    SeoContent, Subcategory, Support, TitledText, TocEntry, ToolData, ToolSummary,
};
pub use navigator::{NavState, NavigationError, QuestionNavigator};
pub use validate::{GraphIssue, validate_questions};
