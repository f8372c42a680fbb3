//! List command implementation.
//!
//! The `cursor-rules list` command shows the available rules in the order the
//! install prompt presents them.

use std::io::Write;

use crate::cli::args::ListArgs;
use crate::error::{Result, RulesError};
use crate::installer::load_rules;
use crate::rules::RuleDescriptor;
use crate::ui::{should_use_colors, RulesTheme, UserInterface};

use super::dispatcher::{Command, CommandResult};
use super::open_source;

/// The list command implementation.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }

    fn load(&self) -> Result<Vec<RuleDescriptor>> {
        let source = open_source(self.args.rules_dir.as_deref())?;
        load_rules(source.as_ref())
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let rules = self.load()?;

        // JSON is data, not status, so verbosity does not apply.
        if self.args.json {
            let mut stdout = std::io::stdout().lock();
            write_json(&rules, &mut stdout)?;
            stdout.flush()?;
            return Ok(CommandResult::success());
        }

        if rules.is_empty() {
            ui.message("No rules found");
            return Ok(CommandResult::success());
        }

        let theme = if should_use_colors() {
            RulesTheme::new()
        } else {
            RulesTheme::plain()
        };

        for rule in &rules {
            ui.message(&format!("  {}", theme.format_rule(&rule.name, &rule.filename)));
            if !rule.description.is_empty() {
                ui.message(&format!("    {}", theme.dim.apply_to(&rule.description)));
            }
            if !rule.tags.is_empty() {
                ui.message(&format!("    {}", theme.format_tags(&rule.tags)));
            }
        }

        Ok(CommandResult::success())
    }
}

/// Write `rules` as a pretty-printed JSON array followed by a newline.
pub fn write_json(rules: &[RuleDescriptor], out: &mut dyn Write) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, rules).map_err(|e| RulesError::Other(e.into()))?;
    writeln!(out)?;
    Ok(())
}
