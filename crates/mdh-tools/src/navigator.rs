//! Question-tree navigation for the eligibility checker.
//!
//! [`QuestionNavigator`] walks a list of [`Question`]s from the first one to a
//! terminal [`Outcome`], recording one answer per question. Options name the
//! next question by id; legacy ids are translated through an optional alias
//! table before lookup.
//!
//! A `nextQuestion` that names no question falls back to the question after
//! the current one in list order, and to [`NavState::Stalled`] when the list is
//! exhausted. [`validate_questions`](crate::validate_questions) reports these
//! references ahead of time.

use std::collections::HashMap;

use indexmap::IndexMap;

use crate::email::{EmailCapture, EmailError};
use crate::model::{Outcome, Question};

/// Where a traversal currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    /// No questions were supplied.
    Empty,
    /// Waiting for an answer to the named question.
    Asking {
        /// Id of the current question.
        question_id: String,
    },
    /// A terminal outcome was reached.
    ShowingResult(Outcome),
    /// A dangling reference ran past the last question.
    Stalled,
}

/// Navigation failure. The state is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavigationError {
    /// The selected value is not an option of the current question.
    #[error("Question '{question}' has no option '{value}'")]
    UnknownOption {
        /// Current question id.
        question: String,
        /// Rejected value.
        value: String,
    },
    /// No question is being asked.
    #[error("No question is awaiting an answer")]
    NotAsking,
}

/// Eligibility questionnaire state machine.
#[derive(Debug, Clone)]
pub struct QuestionNavigator {
    questions: Vec<Question>,
    aliases: HashMap<String, String>,
    state: NavState,
    answers: IndexMap<String, String>,
    email: Option<EmailCapture>,
}

impl QuestionNavigator {
    /// Start a traversal at the first question.
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        let mut navigator = Self {
            questions,
            aliases: HashMap::new(),
            state: NavState::Empty,
            answers: IndexMap::new(),
            email: None,
        };
        navigator.reset();
        navigator
    }

    /// Translate legacy question ids through `aliases` (legacy → canonical).
    #[must_use]
    pub fn with_aliases<I, K, V>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.aliases = aliases
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &NavState {
        &self.state
    }

    /// Question awaiting an answer, if any.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        let index = self.current_index()?;
        self.questions.get(index)
    }

    /// 1-based position of the current question in the list.
    #[must_use]
    pub fn progress(&self) -> Option<usize> {
        self.current_index().map(|index| index + 1)
    }

    /// Number of questions.
    #[must_use]
    pub fn total(&self) -> usize {
        self.questions.len()
    }

    /// Outcome, once reached.
    #[must_use]
    pub fn result(&self) -> Option<&Outcome> {
        match &self.state {
            NavState::ShowingResult(outcome) => Some(outcome),
            _ => None,
        }
    }

    /// Answers recorded so far, in answer order.
    #[must_use]
    pub fn answers(&self) -> &IndexMap<String, String> {
        &self.answers
    }

    /// Email capture sub-flow, offered for likely and maybe outcomes.
    #[must_use]
    pub fn email_capture(&self) -> Option<&EmailCapture> {
        self.email.as_ref()
    }

    /// Answer the current question with the option whose value is `value`.
    ///
    /// An option without a result or next question records the answer and
    /// stays on the current question.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::NotAsking`] outside the asking state and
    /// [`NavigationError::UnknownOption`] for a value the question doesn't
    /// offer.
    pub fn select(&mut self, value: &str) -> Result<&NavState, NavigationError> {
        let index = self.current_index().ok_or(NavigationError::NotAsking)?;
        let question = &self.questions[index];
        let choice = question
            .choice(value)
            .ok_or_else(|| NavigationError::UnknownOption {
                question: question.id.clone(),
                value: value.to_owned(),
            })?;

        let next = if let Some(outcome) = &choice.result {
            Some(NavState::ShowingResult(outcome.clone()))
        } else {
            choice
                .next_question
                .as_deref()
                .map(|target| self.follow(index, target))
        };

        self.answers
            .insert(question.id.clone(), value.to_owned());

        if let Some(state) = next {
            if let NavState::ShowingResult(outcome) = &state
                && outcome.eligible.offers_email_capture()
            {
                self.email = Some(EmailCapture::default());
            }
            self.state = state;
        }

        Ok(&self.state)
    }

    /// Submit an email address for the checklist.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Unavailable`] unless the outcome offers email
    /// capture, otherwise any validation error from [`EmailCapture::submit`].
    pub fn submit_email(&mut self, email: &str) -> Result<(), EmailError> {
        let capture = self.email.as_mut().ok_or(EmailError::Unavailable)?;
        capture.submit(email, &self.answers)
    }

    /// Return to the first question and forget answers and email state.
    pub fn reset(&mut self) {
        self.state = match self.questions.first() {
            Some(first) => NavState::Asking {
                question_id: first.id.clone(),
            },
            None => NavState::Empty,
        };
        self.answers.clear();
        self.email = None;
    }

    fn current_index(&self) -> Option<usize> {
        match &self.state {
            NavState::Asking { question_id } => self.index_of(question_id),
            _ => None,
        }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|q| q.id == id)
    }

    /// Resolve `target` (through the alias table) from the question at `index`.
    fn follow(&self, index: usize, target: &str) -> NavState {
        let resolved = self.aliases.get(target).map_or(target, String::as_str);
        if let Some(next) = self.index_of(resolved) {
            return self.asking(next);
        }

        tracing::warn!(
            from = %self.questions[index].id,
            target,
            "Question not found, falling back to the next question in order"
        );
        if index + 1 < self.questions.len() {
            self.asking(index + 1)
        } else {
            NavState::Stalled
        }
    }

    fn asking(&self, index: usize) -> NavState {
        NavState::Asking {
            question_id: self.questions[index].id.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{Choice, Eligibility};

    fn next(value: &str, target: &str) -> Choice {
        Choice {
            value: value.to_owned(),
            label: value.to_owned(),
            next_question: Some(target.to_owned()),
            result: None,
        }
    }

    fn outcome(value: &str, eligible: Eligibility) -> Choice {
        Choice {
            value: value.to_owned(),
            label: value.to_owned(),
            next_question: None,
            result: Some(Outcome {
                eligible,
                title: format!("{eligible} title"),
                message: format!("{eligible} message"),
                next_steps: String::new(),
                image: None,
            }),
        }
    }

    fn question(id: &str, options: Vec<Choice>) -> Question {
        Question {
            id: id.to_owned(),
            text: format!("{id}?"),
            kind: "radio".to_owned(),
            options,
            image: None,
        }
    }

    /// age → (q2 alias) residence → disability → outcome
    fn questions() -> Vec<Question> {
        vec![
            question(
                "age",
                vec![next("under65", "q2"), outcome("over65", Eligibility::Unlikely)],
            ),
            question(
                "residence",
                vec![next("citizen", "disability"), outcome("visitor", Eligibility::No)],
            ),
            question(
                "disability",
                vec![
                    outcome("permanent", Eligibility::Likely),
                    outcome("unsure", Eligibility::Maybe),
                    outcome("temporary", Eligibility::Unlikely),
                    next("other", "missing-question"),
                ],
            ),
        ]
    }

    fn navigator() -> QuestionNavigator {
        QuestionNavigator::new(questions()).with_aliases([("q2", "residence")])
    }

    fn current_id(nav: &QuestionNavigator) -> Option<&str> {
        nav.current_question().map(|q| q.id.as_str())
    }

    #[test]
    fn test_starts_at_first_question() {
        let nav = navigator();

        assert_eq!(current_id(&nav), Some("age"));
        assert_eq!(nav.progress(), Some(1));
        assert_eq!(nav.total(), 3);
        assert!(nav.answers().is_empty());
    }

    #[test]
    fn test_alias_resolution() {
        let mut nav = navigator();

        nav.select("under65").unwrap();

        assert_eq!(current_id(&nav), Some("residence"));
        assert_eq!(nav.progress(), Some(2));
    }

    #[test]
    fn test_traversal_to_result() {
        let mut nav = navigator();

        nav.select("under65").unwrap();
        nav.select("citizen").unwrap();
        let state = nav.select("permanent").unwrap().clone();

        assert!(matches!(state, NavState::ShowingResult(_)));
        assert_eq!(nav.result().unwrap().eligible, Eligibility::Likely);
        assert_eq!(nav.current_question(), None);
        let answers: Vec<_> = nav
            .answers()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            answers,
            vec![
                ("age", "under65"),
                ("residence", "citizen"),
                ("disability", "permanent")
            ]
        );
    }

    #[test]
    fn test_email_capture_for_likely() {
        let mut nav = navigator();
        nav.select("under65").unwrap();
        nav.select("citizen").unwrap();
        nav.select("unsure").unwrap();

        assert!(nav.email_capture().is_some());
        assert_eq!(nav.submit_email("bad"), Err(EmailError::Invalid));
        nav.submit_email("jo@example.com").unwrap();
        assert!(nav.email_capture().unwrap().is_submitted());
    }

    #[test]
    fn test_no_email_capture_for_no() {
        let mut nav = navigator();
        nav.select("under65").unwrap();
        nav.select("visitor").unwrap();

        assert_eq!(nav.result().unwrap().eligible, Eligibility::No);
        assert!(nav.email_capture().is_none());
        assert_eq!(
            nav.submit_email("jo@example.com"),
            Err(EmailError::Unavailable)
        );
    }

    #[test]
    fn test_unknown_option_leaves_state_unchanged() {
        let mut nav = navigator();

        let err = nav.select("maybe-later").unwrap_err();

        assert_eq!(
            err,
            NavigationError::UnknownOption {
                question: "age".to_owned(),
                value: "maybe-later".to_owned(),
            }
        );
        assert_eq!(current_id(&nav), Some("age"));
        assert!(nav.answers().is_empty());
    }

    #[test]
    fn test_select_after_result_is_rejected() {
        let mut nav = navigator();
        nav.select("over65").unwrap();

        assert_eq!(nav.select("under65"), Err(NavigationError::NotAsking));
    }

    #[test]
    fn test_dangling_reference_falls_back_to_next_in_order() {
        let mut nav = QuestionNavigator::new(questions());

        // Without the alias, "q2" is unknown; the next question is residence.
        nav.select("under65").unwrap();

        assert_eq!(current_id(&nav), Some("residence"));
    }

    #[test]
    fn test_dangling_reference_on_last_question_stalls() {
        let mut nav = navigator();
        nav.select("under65").unwrap();
        nav.select("citizen").unwrap();

        let state = nav.select("other").unwrap();

        assert_eq!(state, &NavState::Stalled);
        assert_eq!(nav.progress(), None);
        assert_eq!(nav.answers().get("disability").map(String::as_str), Some("other"));
    }

    #[test]
    fn test_option_without_target_stays_put() {
        let dead_end = Choice {
            value: "skip".to_owned(),
            label: "Skip".to_owned(),
            next_question: None,
            result: None,
        };
        let mut nav = QuestionNavigator::new(vec![question("only", vec![dead_end])]);

        nav.select("skip").unwrap();

        assert_eq!(current_id(&nav), Some("only"));
        assert_eq!(nav.answers().len(), 1);
    }

    #[test]
    fn test_reset_from_every_state() {
        let mut nav = navigator();

        nav.select("under65").unwrap();
        nav.reset();
        assert_eq!(current_id(&nav), Some("age"));
        assert!(nav.answers().is_empty());

        nav.select("under65").unwrap();
        nav.select("citizen").unwrap();
        nav.select("permanent").unwrap();
        nav.submit_email("jo@example.com").unwrap();
        nav.reset();
        assert_eq!(current_id(&nav), Some("age"));
        assert!(nav.answers().is_empty());
        assert!(nav.result().is_none());
        assert!(nav.email_capture().is_none());

        nav.select("under65").unwrap();
        nav.select("citizen").unwrap();
        nav.select("other").unwrap();
        nav.reset();
        assert_eq!(current_id(&nav), Some("age"));
    }

    #[test]
    fn test_empty_questions() {
        let mut nav = QuestionNavigator::new(Vec::new());

        assert_eq!(nav.state(), &NavState::Empty);
        assert_eq!(nav.select("anything"), Err(NavigationError::NotAsking));
        nav.reset();
        assert_eq!(nav.state(), &NavState::Empty);
    }
}
