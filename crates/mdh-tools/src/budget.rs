//! Budget-category explorer.
//!
//! A linear walk over the explorer's sections. The first section collects the
//! user's goals; every later section lists supports, flagged as possibly
//! eligible when one of their `relatedGoals` was selected. After the last
//! section the explorer switches to a summary that shows eligible supports
//! only.

use indexmap::IndexSet;

use crate::model::{BudgetExplorer, BudgetSection, Subcategory, Support};

/// Budget explorer failure. The state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    /// The explorer defines no sections.
    #[error("Budget explorer has no sections")]
    NoSections,
    /// Leaving the goal section requires at least one goal.
    #[error("Select at least one goal to continue")]
    NoGoalsSelected,
    /// The id is not one of the goal section's questions.
    #[error("Unknown goal '{0}'")]
    UnknownGoal(String),
}

/// Budget explorer state machine.
#[derive(Debug, Clone)]
pub struct BudgetNavigator {
    explorer: BudgetExplorer,
    active: usize,
    selected_goals: IndexSet<String>,
    show_eligible: bool,
}

impl BudgetNavigator {
    /// Start at the goal section.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::NoSections`] if the explorer is empty.
    pub fn new(explorer: BudgetExplorer) -> Result<Self, BudgetError> {
        if explorer.sections.is_empty() {
            return Err(BudgetError::NoSections);
        }
        Ok(Self {
            explorer,
            active: 0,
            selected_goals: IndexSet::new(),
            show_eligible: false,
        })
    }

    /// Explorer definition.
    #[must_use]
    pub fn explorer(&self) -> &BudgetExplorer {
        &self.explorer
    }

    /// Section currently shown.
    #[must_use]
    pub fn current_section(&self) -> &BudgetSection {
        &self.explorer.sections[self.active]
    }

    /// Whether the goal section is shown.
    #[must_use]
    pub fn is_goal_section(&self) -> bool {
        self.active == 0
    }

    /// Whether the summary (eligible supports only) is shown.
    #[must_use]
    pub fn is_showing_eligible(&self) -> bool {
        self.show_eligible
    }

    /// Selected goal ids, in selection order.
    #[must_use]
    pub fn selected_goals(&self) -> &IndexSet<String> {
        &self.selected_goals
    }

    /// Select `goal_id`, or deselect it if already selected.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::UnknownGoal`] if `goal_id` is not a question of
    /// the goal section.
    pub fn toggle_goal(&mut self, goal_id: &str) -> Result<(), BudgetError> {
        let known = self.explorer.sections[0]
            .questions
            .iter()
            .any(|goal| goal.id == goal_id);
        if !known {
            return Err(BudgetError::UnknownGoal(goal_id.to_owned()));
        }

        if !self.selected_goals.shift_remove(goal_id) {
            self.selected_goals.insert(goal_id.to_owned());
        }
        Ok(())
    }

    /// Advance one section, or switch to the summary from the last one.
    ///
    /// # Errors
    ///
    /// Returns [`BudgetError::NoGoalsSelected`] when leaving the goal section
    /// with nothing selected.
    pub fn next(&mut self) -> Result<(), BudgetError> {
        if self.is_goal_section() && self.selected_goals.is_empty() {
            return Err(BudgetError::NoGoalsSelected);
        }
        if self.active + 1 < self.explorer.sections.len() {
            self.active += 1;
        } else {
            self.show_eligible = true;
        }
        Ok(())
    }

    /// Go back one section; does nothing on the goal section.
    pub fn previous(&mut self) {
        self.active = self.active.saturating_sub(1);
    }

    /// Switch to the summary.
    pub fn show_eligible(&mut self) {
        self.show_eligible = true;
    }

    /// Return to the goal section with the summary off. Goals stay selected.
    pub fn start_over(&mut self) {
        self.active = 0;
        self.show_eligible = false;
    }

    /// Whether any of the support's related goals is selected.
    #[must_use]
    pub fn is_eligible(&self, support: &Support) -> bool {
        support
            .related_goals
            .iter()
            .any(|goal| self.selected_goals.contains(goal))
    }

    /// Supports to list for a subcategory: all of them while browsing, the
    /// eligible ones in the summary.
    #[must_use]
    pub fn visible_supports<'a>(&self, subcategory: &'a Subcategory) -> Vec<&'a Support> {
        subcategory
            .supports
            .iter()
            .filter(|support| !self.show_eligible || self.is_eligible(support))
            .collect()
    }

    /// Subcategories to list for a section; the summary drops those with no
    /// eligible support.
    #[must_use]
    pub fn visible_subcategories<'a>(&self, section: &'a BudgetSection) -> Vec<&'a Subcategory> {
        section
            .subcategories
            .iter()
            .filter(|sub| !self.show_eligible || sub.supports.iter().any(|s| self.is_eligible(s)))
            .collect()
    }

    /// Every eligible support across all sections, in authored order.
    #[must_use]
    pub fn eligible_supports(&self) -> Vec<&Support> {
        self.explorer
            .sections
            .iter()
            .flat_map(|section| &section.subcategories)
            .flat_map(|sub| &sub.supports)
            .filter(|support| self.is_eligible(support))
            .collect()
    }

    /// "Step i/n", or "Results" in the summary.
    #[must_use]
    pub fn step_label(&self) -> String {
        if self.show_eligible {
            "Results".to_owned()
        } else {
            format!("Step {}/{}", self.active + 1, self.explorer.sections.len())
        }
    }

    /// Progress bar fill, 0–100.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress_percent(&self) -> f64 {
        if self.show_eligible {
            100.0
        } else {
            (self.active + 1) as f64 / self.explorer.sections.len() as f64 * 100.0
        }
    }
}
