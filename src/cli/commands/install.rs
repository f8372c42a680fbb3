//! Install command implementation.
//!
//! The `cursor-rules install` command asks which rules to install and copies
//! them into `.cursor/rules` under the project root.

use std::path::{Path, PathBuf};

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::installer::{Installer, Selection};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::open_source;

/// The install command implementation.
pub struct InstallCommand {
    project_root: PathBuf,
    args: InstallArgs,
}

impl InstallCommand {
    /// Create a new install command.
    pub fn new(project_root: &Path, args: InstallArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            args,
        }
    }

    fn selection(&self) -> Selection {
        if self.args.all {
            Selection::All
        } else if !self.args.select.is_empty() {
            Selection::Named(self.args.select.clone())
        } else {
            Selection::Prompt
        }
    }
}

impl Command for InstallCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let source = open_source(self.args.rules_dir.as_deref())?;
        tracing::debug!("Installing from {}", source.location());

        let installer = Installer::new(source, &self.project_root).dry_run(self.args.dry_run);
        let outcome = installer.run(&self.selection(), ui)?;
        tracing::debug!("Install finished: {:?}", outcome);

        // Empty source, empty selection and cancellation all exit cleanly.
        Ok(CommandResult::success())
    }
}
