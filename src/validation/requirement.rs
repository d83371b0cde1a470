//! Password requirements
//!
//! A requirement is a named predicate over the password together with the
//! message reported when the predicate does not hold. Validators evaluate
//! their requirements in list order.

use super::results::Failure;
use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

pub const PASSWORDS_LACK_A_NUMBER: &str = "Passwords need at least one number";
pub const PASSWORDS_LACK_A_LOWERCASE_LETTER: &str = "Passwords need at least one lowercase letter";
pub const PASSWORDS_LACK_AN_UPPERCASE_LETTER: &str =
    "Passwords need at least one uppercase letter";

type Predicate = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// A single check applied to the password.
#[derive(Clone)]
pub struct Requirement {
    name: Cow<'static, str>,
    predicate: Predicate,
    failure_message: Cow<'static, str>,
}

impl Requirement {
    /// Builds a requirement from an arbitrary predicate.
    pub fn new<F>(
        name: impl Into<Cow<'static, str>>,
        failure_message: impl Into<Cow<'static, str>>,
        predicate: F,
    ) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            predicate: Arc::new(predicate),
            failure_message: failure_message.into(),
        }
    }

    /// At least one ASCII digit.
    pub fn has_digit() -> Self {
        Self::new("has_digit", PASSWORDS_LACK_A_NUMBER, has_digit)
    }

    /// At least one ASCII lowercase letter.
    pub fn has_lowercase() -> Self {
        Self::new(
            "has_lowercase",
            PASSWORDS_LACK_A_LOWERCASE_LETTER,
            has_lowercase,
        )
    }

    /// At least one ASCII uppercase letter.
    pub fn has_uppercase() -> Self {
        Self::new(
            "has_uppercase",
            PASSWORDS_LACK_AN_UPPERCASE_LETTER,
            has_uppercase,
        )
    }

    /// The digit, lowercase and uppercase requirements, in that order.
    pub fn standard() -> Vec<Self> {
        vec![Self::has_digit(), Self::has_lowercase(), Self::has_uppercase()]
    }

    pub fn check(&self, password: &str) -> bool {
        (self.predicate)(password)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn failure_message(&self) -> &str {
        &self.failure_message
    }

    pub(crate) fn unmet(&self) -> Failure {
        Failure::RequirementNotMet {
            message: self.failure_message.clone(),
        }
    }
}

impl fmt::Debug for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Requirement")
            .field("name", &self.name)
            .field("failure_message", &self.failure_message)
            .finish_non_exhaustive()
    }
}

/// Built-in requirements that can be named in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    HasDigit,
    HasLowercase,
    HasUppercase,
}

impl From<RequirementKind> for Requirement {
    fn from(kind: RequirementKind) -> Self {
        match kind {
            RequirementKind::HasDigit => Requirement::has_digit(),
            RequirementKind::HasLowercase => Requirement::has_lowercase(),
            RequirementKind::HasUppercase => Requirement::has_uppercase(),
        }
    }
}

fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}
