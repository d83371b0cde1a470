//! Form sessions
//!
//! Holds the credentials a form is editing and keeps their validation
//! outcome current.

pub mod session;

pub use session::{FormSession, SubmitFn};
