//! cursor-rules - Pick Cursor rules and install them into a project.
//!
//! Reads a set of `.mdc` rule files, shows a checkbox list built from their
//! front matter, and copies the chosen files into `.cursor/rules` of the
//! project.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`error`] - Error types and result aliases
//! - [`installer`] - The enumerate, prompt and copy flow
//! - [`rules`] - Rule files, front matter and rule sources
//! - [`ui`] - Interactive prompts and terminal output
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use cursor_rules::rules::{parse_metadata, RuleDescriptor};
//!
//! let metadata = parse_metadata("# no front matter\n", Path::new("b.mdc")).unwrap();
//! let rule = RuleDescriptor::from_metadata("b.mdc", metadata);
//! assert_eq!(rule.name, "b");
//! assert_eq!(rule.label(), "b — ");
//! ```
//!
//! For the full install flow, see [`installer::Installer`].

pub mod cli;
pub mod error;
pub mod installer;
pub mod rules;
pub mod ui;

pub use error::{Result, RulesError};
