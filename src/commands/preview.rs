use std::fs;

use crate::core::{GlossarySplitter, Project};
use crate::error::{GlossplitError, SplitError};
use crate::models::{Manifest, SplitPlan};

/// Show what a split would write without running it.
///
/// Reads the snapshot when one exists, since a real split restores the
/// manifest from it first.
pub fn preview_split(project: &Project, source: &str, output: &str) -> Result<SplitPlan, GlossplitError> {
    let guard = project.backup_guard();
    let manifest_path = if guard.has_snapshot() {
        guard.snapshot_path()
    } else {
        guard.manifest_path()
    };
    let manifest = Manifest::load(&manifest_path)?;

    let source_path = project.resolve(source);
    let text = fs::read_to_string(&source_path).map_err(|e| SplitError::ReadError(source_path.clone(), e))?;

    let plan = GlossarySplitter::new(project).plan(&manifest, source, output, &text)?;

    println!("=== SPLIT PREVIEW: {} ===\n", plan.source);
    println!("Introduction: {} ({} bytes)", plan.intro.manifest_entry, plan.intro.content.len());

    println!("\nTerm files ({}):", plan.terms.len());
    for term in &plan.terms {
        println!("  - {} <- {}", term.file.manifest_entry, term.label);
    }

    if !plan.skipped.is_empty() {
        println!("\nSections without a label (dropped): {:?}", plan.skipped);
    }

    if !plan.collisions.is_empty() {
        println!("\nFilename collisions:");
        for collision in &plan.collisions {
            println!("  - {}: '{}' and '{}'", collision.filename, collision.first, collision.second);
        }
    }

    println!("\n=== markdown_paths after split ===");
    for (i, entry) in plan.markdown_paths.iter().enumerate() {
        println!("{:>4}. {}", i + 1, entry);
    }

    Ok(plan)
}
