//! Credential payload
//!
//! Defines the username/password/confirmation triple handed to validators.

use std::fmt;

/// A username, password and password confirmation as typed into a form.
///
/// Absent fields are represented as empty text, never as a missing value.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
    pub password_confirmation: String,
}

impl Credentials {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            password_confirmation: password_confirmation.into(),
        }
    }

    /// Credentials with every field empty, the state of a fresh form.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a copy keeping the username but with both password fields cleared.
    pub fn with_cleared_password(&self) -> Self {
        Self {
            username: self.username.clone(),
            password: String::new(),
            password_confirmation: String::new(),
        }
    }

    /// Whether the password field holds any text.
    pub fn has_password_input(&self) -> bool {
        !self.password.is_empty()
    }
}

// Passwords never reach logs through `{:?}`.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &redact(&self.password))
            .field("password_confirmation", &redact(&self.password_confirmation))
            .finish()
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "[REDACTED]" }
}
