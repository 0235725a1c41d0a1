//! Internal implementation modules for `shotline-core`.
//!
//! Most callers should go through the re-exports at the crate root rather
//! than importing these modules directly.

pub mod commands;
pub mod config;
pub mod effects;
pub mod scene;
pub mod tooling;
