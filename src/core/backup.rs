use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::BackupError;

/// Keeps a write-once pristine copy of the manifest and restores from it.
pub struct BackupGuard {
    manifest: PathBuf,
    snapshot: PathBuf,
}

impl BackupGuard {
    pub fn new(manifest: PathBuf, snapshot: PathBuf) -> Self {
        Self { manifest, snapshot }
    }

    pub fn manifest_path(&self) -> &Path {
        &self.manifest
    }

    pub fn snapshot_path(&self) -> &Path {
        &self.snapshot
    }

    pub fn has_snapshot(&self) -> bool {
        self.snapshot.is_file()
    }

    /// Capture the snapshot if it does not exist yet, then restore the
    /// manifest from it. Returns whether a new snapshot was captured.
    ///
    /// The manifest is overwritten on every call, so a split always starts
    /// from the manifest as it was before the first split.
    pub fn ensure_restore_point(&self) -> Result<bool, BackupError> {
        let captured = if self.has_snapshot() {
            debug!("Snapshot exists: {}", self.snapshot.display());
            false
        } else {
            fs::copy(&self.manifest, &self.snapshot).map_err(|source| BackupError::CaptureFailed {
                manifest: self.manifest.clone(),
                snapshot: self.snapshot.clone(),
                source,
            })?;
            info!("Created manifest snapshot: {}", self.snapshot.display());
            true
        };

        self.copy_back()?;
        Ok(captured)
    }

    /// Restore the manifest from an existing snapshot
    pub fn restore(&self) -> Result<(), BackupError> {
        if !self.has_snapshot() {
            return Err(BackupError::SnapshotNotFound(self.snapshot.clone()));
        }
        self.copy_back()
    }

    fn copy_back(&self) -> Result<(), BackupError> {
        fs::copy(&self.snapshot, &self.manifest).map_err(|source| BackupError::RestoreFailed {
            manifest: self.manifest.clone(),
            snapshot: self.snapshot.clone(),
            source,
        })?;
        info!("Restored {} from snapshot", self.manifest.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn guard_in(dir: &Path) -> BackupGuard {
        BackupGuard::new(dir.join("specs.json"), dir.join("specs.unsplit.json"))
    }

    #[test]
    fn test_first_run_captures_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("specs.json"), "{\"specs\":[]}").unwrap();

        let guard = guard_in(temp_dir.path());
        assert!(guard.ensure_restore_point().unwrap());
        assert_eq!(
            fs::read_to_string(guard.snapshot_path()).unwrap(),
            "{\"specs\":[]}"
        );
    }

    #[test]
    fn test_snapshot_is_never_overwritten() {
        let temp_dir = TempDir::new().unwrap();
        let guard = guard_in(temp_dir.path());
        fs::write(guard.manifest_path(), "pristine").unwrap();
        guard.ensure_restore_point().unwrap();

        fs::write(guard.manifest_path(), "edited after split").unwrap();
        assert!(!guard.ensure_restore_point().unwrap());

        assert_eq!(fs::read_to_string(guard.snapshot_path()).unwrap(), "pristine");
        assert_eq!(fs::read_to_string(guard.manifest_path()).unwrap(), "pristine");
    }

    #[test]
    fn test_restore_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let guard = guard_in(temp_dir.path());
        fs::write(guard.manifest_path(), "{\n  \"specs\": []\n}").unwrap();

        guard.ensure_restore_point().unwrap();
        let after_first = fs::read(guard.manifest_path()).unwrap();
        guard.ensure_restore_point().unwrap();
        let after_second = fs::read(guard.manifest_path()).unwrap();

        assert_eq!(after_first, after_second);
    }

    #[test]
    fn test_missing_manifest_fails_capture() {
        let temp_dir = TempDir::new().unwrap();
        let guard = guard_in(temp_dir.path());

        let err = guard.ensure_restore_point().unwrap_err();
        assert!(matches!(err, BackupError::CaptureFailed { .. }));
    }

    #[test]
    fn test_restore_without_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let guard = guard_in(temp_dir.path());
        fs::write(guard.manifest_path(), "{}").unwrap();

        let err = guard.restore().unwrap_err();
        assert!(matches!(err, BackupError::SnapshotNotFound(_)));
    }
}
