use crate::core::Project;
use crate::error::GlossplitError;

/// Put the manifest back to its pre-split state
pub fn restore_manifest(project: &Project) -> Result<(), GlossplitError> {
    let guard = project.backup_guard();
    guard.restore()?;
    println!(
        "Restored {} from {}",
        guard.manifest_path().display(),
        guard.snapshot_path().display()
    );
    println!("Term files from earlier splits are left in place; delete them before splitting again.");
    Ok(())
}
