//! Command dispatching.
//!
//! Running `cursor-rules` with no subcommand behaves like `cursor-rules install`.

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// A CLI subcommand.
pub trait Command {
    /// Run the command, reporting through `ui`.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Outcome of a command that ran without error.
#[derive(Debug)]
pub struct CommandResult {
    /// Process exit code.
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    project_root: PathBuf,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given project root.
    pub fn new(project_root: PathBuf) -> Self {
        Self { project_root }
    }

    /// Run the command selected on the command line.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Install(args)) => {
                let cmd = super::install::InstallCommand::new(&self.project_root, args.clone());
                cmd.execute(ui)
            }
            Some(Commands::List(args)) => {
                let cmd = super::list::ListCommand::new(args.clone());
                cmd.execute(ui)
            }
            Some(Commands::Completions(args)) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
            None => {
                let cmd =
                    super::install::InstallCommand::new(&self.project_root, InstallArgs::default());
                cmd.execute(ui)
            }
        }
    }
}
