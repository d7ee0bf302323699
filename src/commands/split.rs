use tracing::info;

use crate::core::{check_preconditions, GlossarySplitter, Project};
use crate::error::GlossplitError;
use crate::models::SplitPlan;

/// The operator's answer to "split now?"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Granted,
    Denied,
}

impl From<bool> for Confirmation {
    fn from(granted: bool) -> Self {
        if granted {
            Confirmation::Granted
        } else {
            Confirmation::Denied
        }
    }
}

/// Gate, restore the manifest from its snapshot, then split.
///
/// Nothing is touched when the confirmation was denied or a precondition
/// fails.
pub fn run_split(
    project: &Project,
    source: &str,
    output: &str,
    confirmation: Confirmation,
) -> Result<SplitPlan, GlossplitError> {
    if confirmation == Confirmation::Denied {
        return Err(GlossplitError::Cancelled);
    }

    let report = check_preconditions(project, source, output);
    if !report.passed() {
        return Err(GlossplitError::Preconditions(report));
    }
    info!("All conditions met. Splitting {}", source);

    let guard = project.backup_guard();
    if guard.ensure_restore_point()? {
        println!("Created one-time backup {}", guard.snapshot_path().display());
    }

    let plan = GlossarySplitter::new(project).split(source, output)?;
    print_split_summary(&plan);
    Ok(plan)
}

fn print_split_summary(plan: &SplitPlan) {
    println!("Created {}", plan.intro.manifest_entry);
    for term in &plan.terms {
        println!("Created {}", term.file.manifest_entry);
    }
    if !plan.skipped.is_empty() {
        println!(
            "\nSkipped {} term section(s) without a label: {:?}",
            plan.skipped.len(),
            plan.skipped
        );
    }
    for collision in &plan.collisions {
        println!(
            "Note: '{}' and '{}' both map to {}",
            collision.first, collision.second, collision.filename
        );
    }
    println!(
        "\nSplitting done: {} term file(s), manifest updated.",
        plan.terms.len()
    );
}
