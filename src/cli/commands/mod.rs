//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Running without a subcommand
//! is the same as `cursor-rules install`.

pub mod completions;
pub mod dispatcher;
pub mod install;
pub mod list;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};

use std::path::Path;

use crate::error::Result;
use crate::rules::{DirSource, EmbeddedSource, RuleSource};

/// Open `--rules-dir` if given, otherwise the bundled rules.
pub(crate) fn open_source(rules_dir: Option<&Path>) -> Result<Box<dyn RuleSource>> {
    match rules_dir {
        Some(dir) => Ok(Box::new(DirSource::new(dir)?)),
        None => Ok(Box::new(EmbeddedSource::new())),
    }
}
