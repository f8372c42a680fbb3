//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

/// cursor-rules - Pick Cursor rules and install them into a project.
#[derive(Debug, Parser)]
#[command(name = "cursor-rules")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show each copied file
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
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
    /// Pick rules and install them (default if no command specified)
    Install(InstallArgs),

    /// List available rules
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Read rules from this directory instead of the bundled set
    #[arg(long, value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,

    /// Install these rule files without prompting (comma-separated)
    #[arg(long, value_delimiter = ',', conflicts_with = "all")]
    pub select: Vec<String>,

    /// Install every rule without prompting
    #[arg(long)]
    pub all: bool,

    /// Show what would be installed without writing
    #[arg(long)]
    pub dry_run: bool,

    /// Never show the interactive prompt
    #[arg(long)]
    pub non_interactive: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Read rules from this directory instead of the bundled set
    #[arg(long, value_name = "DIR")]
    pub rules_dir: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
