//! Console driver
//!
//! Feeds credential lines from a reader into a form session and writes
//! the feedback for each one.

mod handler;
mod parser;

pub use handler::{MAX_LINE_LENGTH, run};
pub use parser::{ConsoleInput, parse_line};
