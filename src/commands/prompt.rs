use dialoguer::{theme::ColorfulTheme, Confirm, Input};
use std::io::IsTerminal;
use tracing::warn;

use crate::commands::split::Confirmation;
use crate::core::Project;
use crate::error::GlossplitError;

/// Whether stdin is a terminal that can answer prompts
pub fn stdin_is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Fill in missing source/output paths, prompting when `interactive`.
///
/// Defaults come from the first spec's `spec_directory`.
pub fn resolve_inputs(
    project: &Project,
    source: Option<String>,
    output: Option<String>,
    interactive: bool,
) -> Result<(String, String), GlossplitError> {
    let (default_source, default_output) = project.default_inputs();

    let source = match source {
        Some(s) => s,
        None if interactive => prompt_path("Path to the terms file", default_source)?,
        None => default_source,
    };
    let output = match output {
        Some(o) => o,
        None if interactive => prompt_path("Directory for the split files", default_output)?,
        None => default_output,
    };

    Ok((source, output))
}

fn prompt_path(prompt: &str, default: String) -> Result<String, GlossplitError> {
    Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(default)
        .interact_text()
        .map_err(|e| GlossplitError::Prompt(e.to_string()))
}

/// Decide whether to split: `--yes` grants, a terminal asks, anything else
/// is denied.
pub fn confirm_split(yes: bool, interactive: bool) -> Result<Confirmation, GlossplitError> {
    if yes {
        Ok(Confirmation::Granted)
    } else if interactive {
        prompt_confirmation()
    } else {
        warn!("stdin is not a terminal; pass --yes to split without confirmation");
        Ok(Confirmation::Denied)
    }
}

/// Ask the operator to confirm the split
pub fn prompt_confirmation() -> Result<Confirmation, GlossplitError> {
    Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt("Are you sure you want to split files?")
        .default(false)
        .interact()
        .map(Confirmation::from)
        .map_err(|e| GlossplitError::Prompt(e.to_string()))
}
