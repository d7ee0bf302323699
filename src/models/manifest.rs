use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::ManifestError;

/// The specs.json document build index.
///
/// Only `specs[0]` is ever read or rewritten; any other spec configurations
/// and unknown fields are carried through untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub specs: Vec<SpecConfig>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// File the manifest was loaded from
    #[serde(skip)]
    path: PathBuf,
}

/// One document build configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecConfig {
    /// Base directory of the document's content
    #[serde(default)]
    pub spec_directory: String,
    /// Markdown files in render order
    #[serde(default)]
    pub markdown_paths: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Manifest {
    /// Read and parse a manifest file
    pub fn load(path: &Path) -> Result<Self, ManifestError> {
        let content = fs::read_to_string(path)
            .map_err(|e| ManifestError::ReadError(path.to_path_buf(), e))?;
        Self::parse(&content, path)
    }

    /// Parse manifest JSON; `path` is only used for error reporting and saving
    pub fn parse(content: &str, path: &Path) -> Result<Self, ManifestError> {
        let mut manifest: Manifest = serde_json::from_str(content)
            .map_err(|e| ManifestError::ParseError(path.to_path_buf(), e.to_string()))?;
        if manifest.specs.is_empty() {
            return Err(ManifestError::NoSpecs(path.to_path_buf()));
        }
        manifest.path = path.to_path_buf();
        debug!(
            "Loaded manifest {} with {} markdown paths in the first spec",
            path.display(),
            manifest.specs[0].markdown_paths.len()
        );
        Ok(manifest)
    }

    /// Path the manifest was loaded from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The first spec configuration, the only one glossplit touches
    pub fn primary_spec(&self) -> Result<&SpecConfig, ManifestError> {
        self.specs
            .first()
            .ok_or_else(|| ManifestError::NoSpecs(self.path.clone()))
    }

    pub fn primary_spec_mut(&mut self) -> Result<&mut SpecConfig, ManifestError> {
        let path = self.path.clone();
        self.specs.first_mut().ok_or(ManifestError::NoSpecs(path))
    }

    /// Write the manifest back to its file atomically (write to temp, then rename)
    pub fn save(&self) -> Result<(), ManifestError> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ManifestError::ParseError(self.path.clone(), e.to_string()))?;

        let temp_file = self.path.with_extension("json.tmp");
        fs::write(&temp_file, &json).map_err(|e| ManifestError::WriteError(temp_file.clone(), e))?;

        fs::rename(&temp_file, &self.path)
            .map_err(|e| ManifestError::WriteError(self.path.clone(), e))?;

        debug!("Saved manifest {}", self.path.display());
        Ok(())
    }
}
