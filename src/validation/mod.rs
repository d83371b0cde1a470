//! Credential validation
//!
//! Credentials, password requirements, validators and their outcomes.

pub mod credentials;
pub mod requirement;
pub mod results;
pub mod validator;

pub use credentials::Credentials;
pub use requirement::{Requirement, RequirementKind};
pub use results::{Failure, Feedback, ValidationOutcome};
pub use validator::{
    AlwaysValid, CredentialsValidator, MIN_PASSWORD_LENGTH, MIN_USERNAME_LENGTH, NeverValid,
    PasswordValidator,
};
