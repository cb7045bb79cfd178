//! Subcommand handlers.

pub mod addresses;
pub mod generate;
pub mod preset;
