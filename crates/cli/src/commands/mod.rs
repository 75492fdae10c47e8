//! Subcommand implementations.

pub mod backup;
pub mod settings;
