//! Common test utilities

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use glossplit::core::Project;
use glossplit::models::Config;

/// Glossary used across the integration tests
pub const GLOSSARY: &str = "# Terms and Definitions\n\n\
[[def: Apple]]\n~ An apple is a fruit.\n\n\
[[def: Banana, plantain]]\n~ A banana is a fruit.\n\n\
[[def: Client/Server]]\n~ A split of responsibilities.\n";

/// Create a test project with a manifest listing `markdown_paths`
pub fn create_test_project(markdown_paths: &[&str]) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let project_root = temp_dir.path().to_path_buf();

    write_manifest(&project_root, "./spec/", markdown_paths);

    (temp_dir, project_root)
}

/// Write specs.json with a single spec configuration
pub fn write_manifest(project_root: &Path, spec_directory: &str, markdown_paths: &[&str]) {
    let manifest = serde_json::json!({
        "specs": [{
            "title": "Test Spec",
            "spec_directory": spec_directory,
            "markdown_paths": markdown_paths,
            "output_path": "./docs"
        }]
    });
    fs::write(
        project_root.join("specs.json"),
        serde_json::to_string_pretty(&manifest).expect("Failed to serialize manifest"),
    )
    .expect("Failed to write manifest");
}

/// Create a file relative to the project root, parents included
pub fn create_file(project_root: &Path, path: &str, content: &str) {
    let full_path = project_root.join(path);
    if let Some(parent) = full_path.parent() {
        fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    fs::write(full_path, content).expect("Failed to write file");
}

/// `markdown_paths` of the first spec in the project's manifest
pub fn read_markdown_paths(project_root: &Path) -> Vec<String> {
    let content = fs::read_to_string(project_root.join("specs.json")).expect("Failed to read manifest");
    let manifest: serde_json::Value = serde_json::from_str(&content).expect("Invalid manifest JSON");
    manifest["specs"][0]["markdown_paths"]
        .as_array()
        .expect("markdown_paths is not an array")
        .iter()
        .map(|v| v.as_str().expect("non-string path").to_string())
        .collect()
}

/// Project with the default configuration
pub fn open(project_root: &Path) -> Project {
    Project::new(project_root.to_path_buf(), Config::default())
}
