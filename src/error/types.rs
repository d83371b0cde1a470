//! Error types
//!
//! Validation failures are ordinary outcomes, not errors. The types here
//! cover what can actually go wrong around validation: loading settings,
//! console I/O and submitting a form that has not passed.

use std::fmt;
use std::io;

use crate::validation::Failure;

/// Form submission errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    NotValid(Failure),
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmitError::NotValid(failure) if failure.is_quiet() => {
                write!(f, "Credentials are not valid")
            }
            SubmitError::NotValid(failure) => write!(f, "Credentials are not valid: {}", failure),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::NotValid(failure) => Some(failure),
        }
    }
}

/// Top-level application error
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::IoError(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}
