//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use crate::output::OutputFormat;

/// version-report - Report installed software versions.
#[derive(Debug, Parser)]
#[command(name = "version-report")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(flatten)]
    pub show: ShowArgs,

    /// Suppress status messages
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the default report action.
///
/// Tokens in `modules` are joined with spaces and parsed as one
/// comma-separated list, so `version-report sphinx, jinja2` and
/// `version-report "sphinx,jinja2"` are equivalent.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ShowArgs {
    /// Modules to report, as a comma-separated list
    #[arg(value_name = "MODULE")]
    pub modules: Vec<String>,

    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value_t,
        env = "VERSION_REPORT_FORMAT"
    )]
    pub format: OutputFormat,

    /// Known package versions as comma-separated name=version pairs
    #[arg(short, long, env = "VERSION_REPORT_PACKAGES", value_name = "PAIRS")]
    pub packages: Option<String>,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
