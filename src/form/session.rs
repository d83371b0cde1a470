//! Module `session`
//!
//! Defines `FormSession`, the state behind a login or signup form: the
//! credentials typed so far, the latest validation outcome, and the
//! callback that receives credentials once they pass.

use log::{debug, info};

use crate::error::SubmitError;
use crate::validation::{Credentials, CredentialsValidator, Feedback, ValidationOutcome};

/// Receives credentials that passed validation.
pub type SubmitFn = Box<dyn FnMut(Credentials) + Send>;

/// Current credentials and their outcome, re-validated on every change.
pub struct FormSession {
    credentials: Credentials,
    outcome: ValidationOutcome,
    validator: Box<dyn CredentialsValidator>,
    submit: SubmitFn,
}

impl FormSession {
    /// Starts a session with empty credentials, already validated.
    pub fn new(validator: Box<dyn CredentialsValidator>, submit: SubmitFn) -> Self {
        let credentials = Credentials::empty();
        let outcome = validator.validate(&credentials);
        Self {
            credentials,
            outcome,
            validator,
            submit,
        }
    }

    /// Replaces the credentials and re-validates them.
    ///
    /// Unchanged credentials are not re-validated.
    pub fn update(&mut self, credentials: Credentials) -> &ValidationOutcome {
        if credentials != self.credentials {
            self.credentials = credentials;
            self.revalidate();
        }
        &self.outcome
    }

    /// Called when the user starts editing the username field.
    ///
    /// Any password typed so far is discarded.
    pub fn begin_editing_username(&mut self) -> &ValidationOutcome {
        if self.credentials.has_password_input() {
            debug!("Clearing password fields while username is edited");
            self.credentials = self.credentials.with_cleared_password();
            self.revalidate();
        }
        &self.outcome
    }

    /// Hands the credentials to the submit callback if they are valid.
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        match &self.outcome {
            ValidationOutcome::Valid => {
                info!("Submitting credentials for {:?}", self.credentials.username);
                (self.submit)(self.credentials.clone());
                Ok(())
            }
            ValidationOutcome::Invalid(failure) => {
                debug!("Submit blocked: {:?}", failure);
                Err(SubmitError::NotValid(failure.clone()))
            }
        }
    }

    // --------------------
    // Getter methods
    // --------------------

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn outcome(&self) -> &ValidationOutcome {
        &self.outcome
    }

    /// Whether the submit action should be enabled.
    pub fn can_submit(&self) -> bool {
        self.outcome.is_valid()
    }

    pub fn feedback(&self) -> Feedback {
        self.outcome.feedback()
    }

    fn revalidate(&mut self) {
        self.outcome = self.validator.validate(&self.credentials);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{AlwaysValid, Failure, NeverValid, PasswordValidator};
    use std::sync::{Arc, Mutex};

    fn recording_session(
        validator: Box<dyn CredentialsValidator>,
    ) -> (FormSession, Arc<Mutex<Vec<Credentials>>>) {
        let submitted = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&submitted);
        let session = FormSession::new(
            validator,
            Box::new(move |credentials: Credentials| sink.lock().unwrap().push(credentials)),
        );
        (session, submitted)
    }

    #[test]
    fn fresh_session_reports_empty_username() {
        let (session, _) = recording_session(Box::new(PasswordValidator::default()));

        assert_eq!(
            session.outcome(),
            &ValidationOutcome::Invalid(Failure::EmptyUsername)
        );
        assert!(!session.can_submit());
        assert_eq!(session.feedback().message, "Username cannot be empty");
    }

    #[test]
    fn submit_is_gated_on_valid_outcome() {
        let (mut session, submitted) =
            recording_session(Box::new(PasswordValidator::with_standard_requirements()));

        session.update(Credentials::new("George", "1a1a2f", "1a1a2f"));
        let err = session.submit().unwrap_err();
        assert_eq!(
            err,
            SubmitError::NotValid(Failure::RequirementNotMet {
                message: "Passwords need at least one uppercase letter".into()
            })
        );
        assert!(submitted.lock().unwrap().is_empty());

        session.update(Credentials::new("George", "1a1a2F", "1a1a2F"));
        assert!(session.can_submit());
        session.submit().unwrap();

        let submitted = submitted.lock().unwrap();
        assert_eq!(submitted.as_slice(), &[Credentials::new("George", "1a1a2F", "1a1a2F")]);
    }

    #[test]
    fn editing_username_clears_password() {
        let (mut session, _) = recording_session(Box::new(PasswordValidator::default()));

        session.update(Credentials::new("George", "secret", "secret"));
        assert!(session.can_submit());

        let outcome = session.begin_editing_username().clone();
        assert_eq!(session.credentials(), &Credentials::new("George", "", ""));
        assert_eq!(outcome, ValidationOutcome::Invalid(Failure::EmptyPassword));
        assert!(!session.feedback().has_message());
    }

    #[test]
    fn editing_username_without_password_changes_nothing() {
        let (mut session, _) = recording_session(Box::new(PasswordValidator::default()));

        session.update(Credentials::new("Ge", "", ""));
        session.begin_editing_username();
        assert_eq!(session.credentials(), &Credentials::new("Ge", "", ""));
    }

    #[test]
    fn editing_username_keeps_lone_confirmation() {
        let (mut session, _) = recording_session(Box::new(PasswordValidator::default()));

        session.update(Credentials::new("George", "", "secret"));
        session.begin_editing_username();
        assert_eq!(session.credentials(), &Credentials::new("George", "", "secret"));
    }

    #[test]
    fn fixed_strategies_drive_the_gate() {
        let (mut always, submitted) = recording_session(Box::new(AlwaysValid));
        always.submit().unwrap();
        assert_eq!(submitted.lock().unwrap().len(), 1);

        let (mut never, submitted) = recording_session(Box::new(NeverValid));
        never.update(Credentials::new("George", "1a1a2F", "1a1a2F"));
        assert_eq!(
            never.submit(),
            Err(SubmitError::NotValid(Failure::Rejected))
        );
        assert!(submitted.lock().unwrap().is_empty());
    }
}
