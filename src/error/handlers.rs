//! Error handlers
//!
//! Reporting and exit-code mapping for top-level errors.

use crate::error::types::AppError;
use log::error;

/// Log an application error
pub fn handle_error(err: &AppError) {
    error!("Credential validator error: {}", err);
}

/// Convert error to a process exit code
pub fn error_to_exit_code(err: &AppError) -> u8 {
    match err {
        AppError::Config(_) => 78,
        AppError::IoError(_) => 74,
    }
}
