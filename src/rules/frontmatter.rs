//! Front-matter extraction.
//!
//! The block opens with a `---` line at the very start of the file and closes
//! at the next `---` line. A file that does not open with `---` has no
//! metadata; a block that opens but never closes is malformed.

use std::path::Path;

use crate::error::{Result, RulesError};

use super::descriptor::RuleMetadata;

const DELIMITER: &str = "---";

/// Split a rule file into its front-matter text and body.
///
/// Returns `Ok(None)` when the file has no front matter.
fn split_frontmatter(content: &str) -> std::result::Result<Option<(&str, &str)>, String> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');

    let start = match lines.next() {
        Some(first) if first.trim_end() == DELIMITER => first.len(),
        _ => return Ok(None),
    };

    let mut offset = start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let matter = &content[start..offset];
            let body = &content[offset + line.len()..];
            return Ok(Some((matter, body)));
        }
        offset += line.len();
    }

    Err("unterminated front matter (missing closing ---)".to_string())
}

fn is_blank_yaml(matter: &str) -> bool {
    matter.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#')
    })
}

/// Parse the front matter of a rule file.
///
/// `path` is only used to identify the file in errors.
pub fn parse_metadata(content: &str, path: &Path) -> Result<RuleMetadata> {
    let parse_err = |message: String| RulesError::MetadataParse {
        path: path.to_path_buf(),
        message,
    };

    let Some((matter, _body)) = split_frontmatter(content).map_err(parse_err)? else {
        return Ok(RuleMetadata::default());
    };

    if is_blank_yaml(matter) {
        return Ok(RuleMetadata::default());
    }

    serde_yaml::from_str(matter).map_err(|e| parse_err(e.to_string()))
}
