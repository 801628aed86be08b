//! Subcommand implementations.

pub mod completion;
pub mod extract;
pub mod info;
pub mod list;
