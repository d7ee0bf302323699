use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional config file in the project root
pub const CONFIG_FILE: &str = "glossplit.toml";

/// Configuration loaded from glossplit.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub split: SplitConfig,
}

/// Locations of the manifest, its snapshot, and the default split inputs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Manifest path, relative to the project root
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,
    /// Snapshot path; derived from the manifest name when unset
    #[serde(default)]
    pub snapshot: Option<PathBuf>,
    /// Default glossary file, relative to the spec directory
    #[serde(default = "default_source")]
    pub default_source: String,
    /// Default output directory, relative to the spec directory
    #[serde(default = "default_output")]
    pub default_output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            manifest: default_manifest(),
            snapshot: None,
            default_source: default_source(),
            default_output: default_output(),
        }
    }
}

impl PathsConfig {
    /// Snapshot path: explicit, or `<manifest stem>.unsplit.json` next to the manifest
    pub fn snapshot_path(&self) -> PathBuf {
        if let Some(snapshot) = &self.snapshot {
            return snapshot.clone();
        }
        let stem = self
            .manifest
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("specs");
        self.manifest.with_file_name(format!("{}.unsplit.json", stem))
    }
}

fn default_manifest() -> PathBuf {
    PathBuf::from("specs.json")
}

fn default_source() -> String {
    "terms_and_definitions.md".to_string()
}

fn default_output() -> String {
    "terms-definitions".to_string()
}

/// What to do with a term section that has no `[[def: label]]` header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnlabeledPolicy {
    /// Drop the section and log a warning
    #[default]
    Skip,
    /// Abort before anything is written
    Error,
}

/// What to do when two terms produce the same filename
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Last write wins
    #[default]
    Overwrite,
    /// Append `-2`, `-3`, ... to later slugs
    Suffix,
    /// Abort before anything is written
    Error,
}

/// Glossary splitting behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SplitConfig {
    /// Token that opens each term section
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    /// Filename of the introduction file, written next to the glossary
    #[serde(default = "default_intro_filename")]
    pub intro_filename: String,
    #[serde(default)]
    pub on_unlabeled_section: UnlabeledPolicy,
    #[serde(default)]
    pub on_slug_collision: CollisionPolicy,
    /// Repair the glossary file in place before splitting
    #[serde(default = "default_fix_content")]
    pub fix_content: bool,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            intro_filename: default_intro_filename(),
            on_unlabeled_section: UnlabeledPolicy::default(),
            on_slug_collision: CollisionPolicy::default(),
            fix_content: default_fix_content(),
        }
    }
}

fn default_delimiter() -> String {
    "[[def:".to_string()
}

fn default_intro_filename() -> String {
    "glossary-intro-created-by-split-tool.md".to_string()
}

fn default_fix_content() -> bool {
    true
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(path.to_path_buf(), e))?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| ConfigError::ParseError(path.to_path_buf(), e))?;
        config.validate(path)?;
        Ok(config)
    }

    /// Try to load config from glossplit.toml in the given directory
    pub fn load_from_dir(dir: &Path) -> Result<Self, ConfigError> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load_from_file(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Merge CLI overrides into the config
    pub fn with_overrides(mut self, manifest: Option<PathBuf>, no_fix: bool) -> Self {
        if let Some(m) = manifest {
            self.paths.manifest = m;
        }
        if no_fix {
            self.split.fix_content = false;
        }
        self
    }

    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.split.delimiter.is_empty() {
            return Err(ConfigError::Invalid(
                path.to_path_buf(),
                "split.delimiter must not be empty".to_string(),
            ));
        }
        if self.split.intro_filename.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(
                path.to_path_buf(),
                "split.intro_filename must be a bare filename".to_string(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadError(PathBuf, std::io::Error),
    #[error("Failed to parse config file {0}: {1}")]
    ParseError(PathBuf, toml::de::Error),
    #[error("Invalid config file {0}: {1}")]
    Invalid(PathBuf, String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.paths.manifest, PathBuf::from("specs.json"));
        assert_eq!(config.paths.snapshot_path(), PathBuf::from("specs.unsplit.json"));
        assert_eq!(config.paths.default_source, "terms_and_definitions.md");
        assert_eq!(config.paths.default_output, "terms-definitions");
        assert_eq!(config.split.delimiter, "[[def:");
        assert_eq!(config.split.intro_filename, "glossary-intro-created-by-split-tool.md");
        assert_eq!(config.split.on_unlabeled_section, UnlabeledPolicy::Skip);
        assert_eq!(config.split.on_slug_collision, CollisionPolicy::Overwrite);
        assert!(config.split.fix_content);
    }

    #[test]
    fn test_snapshot_follows_manifest_name() {
        let config = Config::default().with_overrides(Some(PathBuf::from("docs/book.json")), false);
        assert_eq!(config.paths.snapshot_path(), PathBuf::from("docs/book.unsplit.json"));
    }

    #[test]
    fn test_config_with_overrides() {
        let config = Config::default().with_overrides(Some(PathBuf::from("other.json")), true);
        assert_eq!(config.paths.manifest, PathBuf::from("other.json"));
        assert!(!config.split.fix_content);
    }

    #[test]
    fn test_parse_toml() {
        let toml_str = r#"
[paths]
manifest = "build/specs.json"
snapshot = "backup/specs.json"

[split]
intro_filename = "intro.md"
on_unlabeled_section = "error"
on_slug_collision = "suffix"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.paths.manifest, PathBuf::from("build/specs.json"));
        assert_eq!(config.paths.snapshot_path(), PathBuf::from("backup/specs.json"));
        assert_eq!(config.paths.default_source, "terms_and_definitions.md"); // default
        assert_eq!(config.split.intro_filename, "intro.md");
        assert_eq!(config.split.on_unlabeled_section, UnlabeledPolicy::Error);
        assert_eq!(config.split.on_slug_collision, CollisionPolicy::Suffix);
        assert_eq!(config.split.delimiter, "[[def:");
    }

    #[test]
    fn test_load_rejects_empty_delimiter() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(CONFIG_FILE), "[split]\ndelimiter = \"\"\n").unwrap();

        let err = Config::load_from_dir(temp_dir.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_, _)));
    }

    #[test]
    fn test_load_from_dir_without_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_from_dir(temp_dir.path()).unwrap();
        assert_eq!(config.split.delimiter, "[[def:");
    }
}
