//! Validation result types
//!
//! Defines the outcome returned by validators and the views derived from it.

use std::borrow::Cow;
use std::fmt;

pub const USERNAME_CANNOT_BE_EMPTY: &str = "Username cannot be empty";
pub const PASSWORDS_DO_NOT_MATCH: &str = "Passwords do not match";

/// Outcome of validating one set of credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationOutcome {
    Valid,
    Invalid(Failure),
}

/// The first rule a set of credentials did not satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Failure {
    EmptyUsername,
    UsernameTooShort { min_length: usize },
    /// Quiet: nothing has been typed into the password field yet.
    EmptyPassword,
    RequirementNotMet { message: Cow<'static, str> },
    PasswordTooShort { min_length: usize },
    /// Quiet: nothing has been typed into the confirmation field yet.
    EmptyPasswordConfirmation,
    PasswordsDoNotMatch,
    /// Quiet blanket rejection with no reason attached.
    Rejected,
}

impl Failure {
    /// The text shown to the user. Empty for quiet failures.
    pub fn explanation(&self) -> Cow<'_, str> {
        match self {
            Failure::EmptyUsername => Cow::Borrowed(USERNAME_CANNOT_BE_EMPTY),
            Failure::UsernameTooShort { min_length } => Cow::Owned(format!(
                "Username must be at least {min_length} characters long"
            )),
            Failure::EmptyPassword | Failure::EmptyPasswordConfirmation | Failure::Rejected => {
                Cow::Borrowed("")
            }
            Failure::RequirementNotMet { message } => Cow::Borrowed(&**message),
            Failure::PasswordTooShort { min_length } => Cow::Owned(format!(
                "Passwords must be at least {min_length} characters long"
            )),
            Failure::PasswordsDoNotMatch => Cow::Borrowed(PASSWORDS_DO_NOT_MATCH),
        }
    }

    /// Quiet failures block submission but have nothing to display.
    ///
    /// A requirement with an empty failure message is quiet too.
    pub fn is_quiet(&self) -> bool {
        self.explanation().is_empty()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.explanation())
    }
}

impl std::error::Error for Failure {}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationOutcome::Valid)
    }

    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ValidationOutcome::Valid => None,
            ValidationOutcome::Invalid(failure) => Some(failure),
        }
    }

    /// Explanation of the failure, `None` when valid.
    pub fn reason(&self) -> Option<Cow<'_, str>> {
        self.failure().map(Failure::explanation)
    }

    /// The shape a form displays: a message line and a submit gate.
    pub fn feedback(&self) -> Feedback {
        Feedback {
            message: self
                .reason()
                .map(Cow::into_owned)
                .unwrap_or_default(),
            is_valid: self.is_valid(),
        }
    }

    /// "No error means valid" view of the outcome.
    pub fn into_result(self) -> Result<(), Failure> {
        match self {
            ValidationOutcome::Valid => Ok(()),
            ValidationOutcome::Invalid(failure) => Err(failure),
        }
    }
}

/// Display-ready view of an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    pub message: String,
    pub is_valid: bool,
}

impl Feedback {
    /// Whether there is anything worth rendering.
    pub fn has_message(&self) -> bool {
        !self.message.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explanations_interpolate_minimums() {
        assert_eq!(
            Failure::UsernameTooShort { min_length: 3 }.to_string(),
            "Username must be at least 3 characters long"
        );
        assert_eq!(
            Failure::PasswordTooShort { min_length: 5 }.to_string(),
            "Passwords must be at least 5 characters long"
        );
    }

    #[test]
    fn quiet_failures_have_empty_explanations() {
        for failure in [
            Failure::EmptyPassword,
            Failure::EmptyPasswordConfirmation,
            Failure::Rejected,
        ] {
            assert!(failure.is_quiet());
            assert_eq!(failure.explanation(), "");
        }
        assert!(!Failure::PasswordsDoNotMatch.is_quiet());
    }

    #[test]
    fn requirement_with_empty_message_is_quiet() {
        let silent = Failure::RequirementNotMet { message: "".into() };
        assert!(silent.is_quiet());

        let feedback = ValidationOutcome::Invalid(silent).feedback();
        assert!(!feedback.is_valid);
        assert!(!feedback.has_message());

        let loud = Failure::RequirementNotMet {
            message: "Passwords need at least one number".into(),
        };
        assert!(!loud.is_quiet());
    }

    #[test]
    fn feedback_of_valid_outcome() {
        let feedback = ValidationOutcome::Valid.feedback();
        assert!(feedback.is_valid);
        assert!(!feedback.has_message());
    }

    #[test]
    fn feedback_of_quiet_failure_is_blank_but_invalid() {
        let feedback = ValidationOutcome::Invalid(Failure::EmptyPassword).feedback();
        assert!(!feedback.is_valid);
        assert!(!feedback.has_message());
    }

    #[test]
    fn result_view() {
        assert!(ValidationOutcome::Valid.into_result().is_ok());
        let err = ValidationOutcome::Invalid(Failure::PasswordsDoNotMatch)
            .into_result()
            .unwrap_err();
        assert_eq!(err.to_string(), PASSWORDS_DO_NOT_MATCH);
    }
}
