//! Credential validators
//!
//! `PasswordValidator` runs the ordered rule set; `AlwaysValid` and
//! `NeverValid` are fixed strategies used to stand in for it.

use log::trace;
use unicode_segmentation::UnicodeSegmentation;

use super::credentials::Credentials;
use super::requirement::Requirement;
use super::results::{Failure, ValidationOutcome};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MIN_PASSWORD_LENGTH: usize = 5;

/// Anything that can judge a set of credentials.
pub trait CredentialsValidator: Send + Sync {
    fn validate(&self, credentials: &Credentials) -> ValidationOutcome;
}

/// Rule-based validator.
///
/// Rules are evaluated in a fixed order and the first failure wins:
/// username presence and length, password presence, each configured
/// requirement in list order, password length, confirmation presence and
/// finally an exact match between password and confirmation.
#[derive(Debug, Clone)]
pub struct PasswordValidator {
    requirements: Vec<Requirement>,
    min_username_length: usize,
    min_password_length: usize,
}

impl Default for PasswordValidator {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl PasswordValidator {
    /// Validator with the default length minimums and the given requirements.
    pub fn new(requirements: Vec<Requirement>) -> Self {
        Self {
            requirements,
            min_username_length: MIN_USERNAME_LENGTH,
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }

    /// Validator requiring a digit, a lowercase and an uppercase letter.
    pub fn with_standard_requirements() -> Self {
        Self::new(Requirement::standard())
    }

    pub fn with_min_username_length(mut self, min_length: usize) -> Self {
        self.min_username_length = min_length;
        self
    }

    pub fn with_min_password_length(mut self, min_length: usize) -> Self {
        self.min_password_length = min_length;
        self
    }

    pub fn requirements(&self) -> &[Requirement] {
        &self.requirements
    }

    pub fn min_username_length(&self) -> usize {
        self.min_username_length
    }

    pub fn min_password_length(&self) -> usize {
        self.min_password_length
    }

    pub fn validate(&self, credentials: &Credentials) -> ValidationOutcome {
        let outcome = match self.first_failure(credentials) {
            Some(failure) => ValidationOutcome::Invalid(failure),
            None => ValidationOutcome::Valid,
        };
        trace!(
            "Validated credentials for {:?}: {:?}",
            credentials.username, outcome
        );
        outcome
    }

    fn first_failure(&self, credentials: &Credentials) -> Option<Failure> {
        let Credentials {
            username,
            password,
            password_confirmation,
        } = credentials;

        if username.is_empty() {
            return Some(Failure::EmptyUsername);
        }
        if grapheme_count(username) < self.min_username_length {
            return Some(Failure::UsernameTooShort {
                min_length: self.min_username_length,
            });
        }
        if password.is_empty() {
            return Some(Failure::EmptyPassword);
        }
        if let Some(unmet) = self.requirements.iter().find(|r| !r.check(password)) {
            return Some(unmet.unmet());
        }
        if grapheme_count(password) < self.min_password_length {
            return Some(Failure::PasswordTooShort {
                min_length: self.min_password_length,
            });
        }
        if password_confirmation.is_empty() {
            return Some(Failure::EmptyPasswordConfirmation);
        }
        if password != password_confirmation {
            return Some(Failure::PasswordsDoNotMatch);
        }
        None
    }
}

impl CredentialsValidator for PasswordValidator {
    fn validate(&self, credentials: &Credentials) -> ValidationOutcome {
        PasswordValidator::validate(self, credentials)
    }
}

/// Accepts everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysValid;

impl CredentialsValidator for AlwaysValid {
    fn validate(&self, credentials: &Credentials) -> ValidationOutcome {
        trace!("Accepting credentials for {:?} unconditionally", credentials.username);
        ValidationOutcome::Valid
    }
}

/// Rejects everything without giving a reason.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverValid;

impl CredentialsValidator for NeverValid {
    fn validate(&self, _credentials: &Credentials) -> ValidationOutcome {
        ValidationOutcome::Invalid(Failure::Rejected)
    }
}

/// User-perceived character count.
fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grapheme_count_merges_combining_marks() {
        assert_eq!(grapheme_count("e\u{301}"), 1);
        assert_eq!(grapheme_count("👨‍👩‍👧"), 1);
        assert_eq!(grapheme_count("abc"), 3);
        assert_eq!(grapheme_count(""), 0);
    }

    #[test]
    fn fixed_strategies() {
        let credentials = Credentials::empty();
        assert_eq!(AlwaysValid.validate(&credentials), ValidationOutcome::Valid);
        assert_eq!(
            NeverValid.validate(&Credentials::new("George", "1a1a2F", "1a1a2F")),
            ValidationOutcome::Invalid(Failure::Rejected)
        );
    }

    #[test]
    fn custom_minimums_are_reported() {
        let validator = PasswordValidator::default()
            .with_min_username_length(6)
            .with_min_password_length(8);

        let outcome = validator.validate(&Credentials::new("Gil", "secret", "secret"));
        assert_eq!(
            outcome.reason().as_deref(),
            Some("Username must be at least 6 characters long")
        );

        let outcome = validator.validate(&Credentials::new("George", "secret", "secret"));
        assert_eq!(
            outcome.reason().as_deref(),
            Some("Passwords must be at least 8 characters long")
        );
    }
}
