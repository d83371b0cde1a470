//! Error handling
//!
//! Defines error types and handling for the validator and its console driver.

pub mod handlers;
pub mod types;

pub use types::*;
