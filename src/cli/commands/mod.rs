//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. The bare invocation (no
//! subcommand) runs [`show::ShowCommand`], which prints the report.

pub mod completions;
pub mod dispatcher;
pub mod show;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
