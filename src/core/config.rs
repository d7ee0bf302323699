use std::path::{Path, PathBuf};
use tracing::info;

use crate::core::project::Project;
use crate::error::GlossplitError;
use crate::models::Config;

/// Load configuration from project directory with CLI overrides
pub fn load_config(
    project_root: &Path,
    manifest: Option<PathBuf>,
    no_fix: bool,
) -> Result<Config, GlossplitError> {
    let config = Config::load_from_dir(project_root)?;
    let config = config.with_overrides(manifest, no_fix);

    info!(
        "Configuration loaded: manifest={}, snapshot={}, delimiter={}",
        config.paths.manifest.display(),
        config.paths.snapshot_path().display(),
        config.split.delimiter
    );

    Ok(config)
}

/// Load the configuration and bind it to the project root
pub fn open_project(
    project_root: &Path,
    manifest: Option<PathBuf>,
    no_fix: bool,
) -> Result<Project, GlossplitError> {
    let config = load_config(project_root, manifest, no_fix)?;
    Ok(Project::new(project_root.to_path_buf(), config))
}
