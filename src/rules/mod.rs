//! Rule files and their metadata.
//!
//! A rule file is a `.mdc` document with an optional YAML front-matter block
//! followed by an opaque body:
//!
//! ```text
//! ---
//! name: Rust conventions
//! description: Idioms to follow in Rust code
//! tags: [rust, style]
//! ---
//!
//! Prefer `?` over `unwrap()` outside tests...
//! ```
//!
//! - [`descriptor`] - Raw metadata and the defaulted [`RuleDescriptor`]
//! - [`frontmatter`] - Front-matter splitting and parsing
//! - [`source`] - Where rule files are read from
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use cursor_rules::rules::{parse_metadata, RuleDescriptor};
//!
//! let content = "---\nname: Alpha\ndescription: First\n---\nbody\n";
//! let metadata = parse_metadata(content, Path::new("a.mdc")).unwrap();
//! let rule = RuleDescriptor::from_metadata("a.mdc", metadata);
//! assert_eq!(rule.label(), "Alpha — First");
//! ```

pub mod descriptor;
pub mod frontmatter;
pub mod source;

pub use descriptor::{is_rule_file, sort_by_name, RuleDescriptor, RuleMetadata, RULE_EXTENSION};
pub use frontmatter::parse_metadata;
pub use source::{DirSource, EmbeddedSource, RuleSource};
