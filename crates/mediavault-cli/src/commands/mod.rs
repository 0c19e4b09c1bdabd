//! CLI command implementations
//!
//! Each subcommand has its own module with a `run` function.

pub mod delete;
pub mod list;
pub mod show;
pub mod status;
pub mod update;
pub mod upload;
