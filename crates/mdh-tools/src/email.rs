//! Email capture offered after a favourable eligibility outcome.
//!
//! There is no backend: a valid submission is logged and marked submitted.

use std::sync::LazyLock;

use indexmap::IndexMap;
use regex::Regex;

/// Loose address shape: something, `@`, something, `.`, something.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Email capture failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    /// Address failed validation.
    #[error("Please enter a valid email address.")]
    Invalid,
    /// The current outcome does not offer email capture.
    #[error("Email capture is only offered for likely or maybe outcomes")]
    Unavailable,
    /// An address was already submitted for this traversal.
    #[error("Your checklist has already been requested")]
    AlreadySubmitted,
}

/// Whether `email` passes the loose address check.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && EMAIL_RE.is_match(email)
}

/// State of the email capture sub-flow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmailCapture {
    email: Option<String>,
}

impl EmailCapture {
    /// Validate and record `email` for a traversal with the given answers.
    ///
    /// # Errors
    ///
    /// Returns [`EmailError::Invalid`] for a malformed address and
    /// [`EmailError::AlreadySubmitted`] on a second submission.
    pub fn submit(
        &mut self,
        email: &str,
        answers: &IndexMap<String, String>,
    ) -> Result<(), EmailError> {
        if self.email.is_some() {
            return Err(EmailError::AlreadySubmitted);
        }
        let email = email.trim();
        if !is_valid_email(email) {
            return Err(EmailError::Invalid);
        }

        tracing::info!(email, answers = ?answers, "Eligibility checklist requested");
        self.email = Some(email.to_owned());
        Ok(())
    }

    /// Whether an address has been submitted.
    #[must_use]
    pub fn is_submitted(&self) -> bool {
        self.email.is_some()
    }

    /// Submitted address.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }
}
