use std::path::PathBuf;
use thiserror::Error;

use crate::core::gate::GateReport;
use crate::models::ConfigError;

/// Exit code for storage and parse failures
pub const EXIT_FAILURE: i32 = 1;
/// Exit code when the precondition gate refused the run
pub const EXIT_PRECONDITION: i32 = 2;
/// Exit code for malformed glossary input under a strict policy
pub const EXIT_MALFORMED: i32 = 3;
/// Exit code when the operator declined the confirmation
pub const EXIT_CANCELLED: i32 = 130;

/// Main error type for Glossplit
#[derive(Error, Debug)]
pub enum GlossplitError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    #[error("Backup error: {0}")]
    Backup(#[from] BackupError),

    #[error("Split error: {0}")]
    Split(#[from] SplitError),

    #[error("Preconditions not met: {}", .0.failures().join("; "))]
    Preconditions(GateReport),

    #[error("Operation cancelled")]
    Cancelled,

    #[error("Failed to get user input: {0}")]
    Prompt(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl GlossplitError {
    /// Process exit code for this error category
    pub fn exit_code(&self) -> i32 {
        match self {
            GlossplitError::Preconditions(_) => EXIT_PRECONDITION,
            GlossplitError::Cancelled => EXIT_CANCELLED,
            GlossplitError::Split(e) if e.is_malformed_input() => EXIT_MALFORMED,
            _ => EXIT_FAILURE,
        }
    }
}

/// Errors related to reading and writing the manifest
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read manifest {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("Failed to write manifest {0}: {1}")]
    WriteError(PathBuf, std::io::Error),

    #[error("Failed to parse manifest {0}: {1}")]
    ParseError(PathBuf, String),

    #[error("Manifest {0} has no spec configurations")]
    NoSpecs(PathBuf),
}

/// Errors related to the manifest snapshot
#[derive(Error, Debug)]
pub enum BackupError {
    #[error("Failed to create snapshot {snapshot} from {manifest}: {source}")]
    CaptureFailed {
        manifest: PathBuf,
        snapshot: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to restore {manifest} from snapshot {snapshot}: {source}")]
    RestoreFailed {
        manifest: PathBuf,
        snapshot: PathBuf,
        source: std::io::Error,
    },

    #[error("Snapshot not found: {0}")]
    SnapshotNotFound(PathBuf),
}

/// Errors raised while splitting the glossary
#[derive(Error, Debug)]
pub enum SplitError {
    #[error("Failed to read glossary {0}: {1}")]
    ReadError(PathBuf, std::io::Error),

    #[error("Failed to write {0}: {1}")]
    WriteError(PathBuf, std::io::Error),

    #[error("'{anchor}' is not listed in markdown_paths of {manifest}")]
    AnchorNotFound { anchor: String, manifest: PathBuf },

    #[error("Term section {index} has no '{delimiter} <label>]]' header")]
    UnlabeledSection { index: usize, delimiter: String },

    #[error("Terms '{first}' and '{second}' both map to {filename}")]
    SlugCollision {
        first: String,
        second: String,
        filename: String,
    },
}

impl SplitError {
    /// Whether this error comes from the glossary content rather than storage
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            SplitError::AnchorNotFound { .. }
                | SplitError::UnlabeledSection { .. }
                | SplitError::SlugCollision { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, GlossplitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct() {
        let cancelled = GlossplitError::Cancelled;
        let io = GlossplitError::Io(std::io::Error::new(std::io::ErrorKind::Other, "disk full"));
        let malformed = GlossplitError::Split(SplitError::UnlabeledSection {
            index: 2,
            delimiter: "[[def:".to_string(),
        });
        let precondition = GlossplitError::Preconditions(GateReport::default());

        assert_eq!(cancelled.exit_code(), EXIT_CANCELLED);
        assert_eq!(io.exit_code(), EXIT_FAILURE);
        assert_eq!(malformed.exit_code(), EXIT_MALFORMED);
        assert_eq!(precondition.exit_code(), EXIT_PRECONDITION);
    }

    #[test]
    fn test_storage_split_error_is_not_malformed() {
        let err = SplitError::WriteError(
            PathBuf::from("out/apple.md"),
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(!err.is_malformed_input());
        assert_eq!(GlossplitError::Split(err).exit_code(), EXIT_FAILURE);
    }

    #[test]
    fn test_anchor_not_found_message() {
        let err = SplitError::AnchorNotFound {
            anchor: "spec/glossary.md".to_string(),
            manifest: PathBuf::from("specs.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("spec/glossary.md"));
        assert!(msg.contains("specs.json"));
    }
}
