//! Interactive prompts.

use std::io;

use console::{style, Term};
use dialoguer::theme::ColorfulTheme;
use dialoguer::MultiSelect;

use crate::error::{Result, RulesError};

use super::{Prompt, PromptResult};

/// Dialoguer theme without the default yellow `?` prefix.
fn prompt_theme() -> ColorfulTheme {
    ColorfulTheme {
        prompt_prefix: style("".to_string()),
        ..ColorfulTheme::default()
    }
}

/// Show a checkbox list and wait for the user.
///
/// Esc, `q` and Ctrl-C all cancel the prompt.
pub fn prompt_user(prompt: &Prompt, term: &Term) -> Result<PromptResult> {
    let labels: Vec<_> = prompt.options.iter().map(|o| o.label.as_str()).collect();

    let selections = MultiSelect::with_theme(&prompt_theme())
        .with_prompt(&prompt.question)
        .items(&labels)
        .interact_on_opt(term);

    match selections {
        Ok(Some(indices)) => Ok(PromptResult::Selected(values_at(prompt, &indices))),
        Ok(None) => Ok(PromptResult::Cancelled),
        Err(e) => {
            let err: io::Error = e.into();
            if err.kind() == io::ErrorKind::Interrupted {
                // The cursor is hidden while the list is drawn.
                term.show_cursor().ok();
                Ok(PromptResult::Cancelled)
            } else {
                Err(RulesError::Io(err))
            }
        }
    }
}

/// Map checked indices back to option values, in display order.
fn values_at(prompt: &Prompt, indices: &[usize]) -> Vec<String> {
    indices
        .iter()
        .filter_map(|&i| prompt.options.get(i))
        .map(|o| o.value.clone())
        .collect()
}
