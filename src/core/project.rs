use std::path::{Component, Path, PathBuf};
use tracing::debug;

use crate::core::backup::BackupGuard;
use crate::models::{Config, Manifest};

/// An explicit project root plus its configuration.
///
/// Manifest entries, the source glossary, and the output directory are all
/// resolved against `root`; nothing reads the process working directory.
#[derive(Debug, Clone)]
pub struct Project {
    root: PathBuf,
    config: Config,
}

impl Project {
    pub fn new(root: PathBuf, config: Config) -> Self {
        Self { root, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Absolute path for a root-relative path
    pub fn resolve(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.root.join(relative)
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.resolve(&self.config.paths.manifest)
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.resolve(self.config.paths.snapshot_path())
    }

    pub fn backup_guard(&self) -> BackupGuard {
        BackupGuard::new(self.manifest_path(), self.snapshot_path())
    }

    /// Default source and output paths, relative to the first spec's directory.
    ///
    /// Falls back to the project root when the manifest cannot be read; the
    /// precondition gate reports the missing manifest separately.
    pub fn default_inputs(&self) -> (String, String) {
        let spec_directory = match Manifest::load(&self.manifest_path()) {
            Ok(manifest) => manifest
                .primary_spec()
                .map(|spec| spec.spec_directory.clone())
                .unwrap_or_default(),
            Err(e) => {
                debug!("No spec directory for defaults: {}", e);
                String::new()
            }
        };
        let base = Path::new(&spec_directory);
        (
            manifest_entry(base, &self.config.paths.default_source),
            manifest_entry(base, &self.config.paths.default_output),
        )
    }
}

/// Join `dir` and `name` into a manifest entry: `/`-separated, `.` components dropped
pub fn manifest_entry(dir: &Path, name: &str) -> String {
    normalize_entry(&dir.join(name))
}

/// Normalize a path the way manifest entries are written
pub fn normalize_entry(path: &Path) -> String {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .map(|c| match c {
            Component::RootDir => String::new(),
            other => other.as_os_str().to_string_lossy().into_owned(),
        })
        .collect::<Vec<_>>()
        .join("/")
}
