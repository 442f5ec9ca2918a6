//! Jump-tour planner CLI library.
//!
//! Command handlers, interactive prompts, terminal styling and output
//! formatting for the `jumptour-cli` binary.

pub mod commands;
pub mod output;
pub mod prompt;
pub mod terminal;
