//! Rule metadata and descriptors.

use icu_collator::options::{CollatorOptions, Strength};
use icu_collator::Collator;
use serde::{Deserialize, Serialize};

use crate::error::{Result, RulesError};

/// File extension that marks a rule file.
pub const RULE_EXTENSION: &str = ".mdc";

/// Front-matter fields as written in the rule file.
///
/// Every field is optional. Keys Cursor itself understands (`globs`,
/// `alwaysApply`, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuleMetadata {
    /// Display name.
    pub name: Option<String>,
    /// Free-text explanation.
    pub description: Option<String>,
    /// Labels.
    pub tags: Option<Vec<String>>,
}

/// A rule file as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDescriptor {
    /// File name within the rules directory.
    pub filename: String,
    /// Display name.
    pub name: String,
    /// Free-text explanation, empty when absent.
    pub description: String,
    /// Labels, empty when absent.
    pub tags: Vec<String>,
}

impl RuleDescriptor {
    /// Build a descriptor, filling in whatever the metadata leaves out.
    ///
    /// - `name` falls back to the file name without [`RULE_EXTENSION`]
    /// - `description` falls back to an empty string
    /// - `tags` fall back to an empty list
    pub fn from_metadata(filename: impl Into<String>, metadata: RuleMetadata) -> Self {
        let filename = filename.into();
        let name = metadata
            .name
            .unwrap_or_else(|| default_name(&filename).to_string());

        Self {
            name,
            description: metadata.description.unwrap_or_default(),
            tags: metadata.tags.unwrap_or_default(),
            filename,
        }
    }

    /// Label shown in the selection prompt.
    pub fn label(&self) -> String {
        format!("{} — {}", self.name, self.description)
    }
}

fn default_name(filename: &str) -> &str {
    filename.strip_suffix(RULE_EXTENSION).unwrap_or(filename)
}

/// Check whether a directory entry name is a rule file.
pub fn is_rule_file(filename: &str) -> bool {
    filename.ends_with(RULE_EXTENSION)
}

/// Sort descriptors by name using Unicode collation (root locale).
///
/// Accented letters sort next to their base letter and lowercase comes
/// before uppercase when names differ only in case. The sort is stable:
/// identical names keep their enumeration order.
pub fn sort_by_name(rules: &mut [RuleDescriptor]) -> Result<()> {
    let mut options = CollatorOptions::default();
    options.strength = Some(Strength::Tertiary);
    let collator = Collator::try_new(Default::default(), options).map_err(|e| {
        RulesError::Other(anyhow::anyhow!("cannot load collation data: {}", e))
    })?;

    rules.sort_by(|a, b| collator.compare(&a.name, &b.name));
    Ok(())
}
