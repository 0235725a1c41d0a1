//! Configuration, the project registration, and per-command context assembly.

pub mod context;
pub mod registry;
pub mod settings;

pub use settings::*;
