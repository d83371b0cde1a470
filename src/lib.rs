pub mod config;
pub mod console;
pub mod error;
pub mod form;
pub mod utils;
pub mod validation;

pub use crate::config::ValidatorConfig;
pub use error::{AppError, SubmitError};
pub use form::FormSession;
pub use validation::{
    AlwaysValid, Credentials, CredentialsValidator, Failure, Feedback, NeverValid,
    PasswordValidator, Requirement, RequirementKind, ValidationOutcome,
};
