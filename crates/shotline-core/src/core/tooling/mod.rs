//! Outcome shaping for the CLI.

pub mod errors;
pub mod outcome;
