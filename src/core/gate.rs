use std::fs;
use std::path::Path;
use tracing::debug;

use crate::core::project::Project;

/// Outcome of one precondition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GateCheck {
    pub name: &'static str,
    pub passed: bool,
    pub detail: String,
}

/// Result of checking whether a split is safe to run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GateReport {
    pub checks: Vec<GateCheck>,
}

impl GateReport {
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|c| c.passed)
    }

    /// Details of the failed checks
    pub fn failures(&self) -> Vec<String> {
        self.checks
            .iter()
            .filter(|c| !c.passed)
            .map(|c| c.detail.clone())
            .collect()
    }

    fn record(&mut self, name: &'static str, passed: bool, detail: String) {
        debug!("Precondition {}: {}", name, if passed { "ok" } else { "failed" });
        self.checks.push(GateCheck { name, passed, detail });
    }
}

/// Check that the manifest and glossary exist and the output directory holds
/// no earlier split output (`.md` files).
pub fn check_preconditions(project: &Project, source: &str, output: &str) -> GateReport {
    let mut report = GateReport::default();

    let manifest = project.manifest_path();
    if manifest.is_file() {
        report.record("manifest", true, format!("Found {}", manifest.display()));
    } else {
        report.record("manifest", false, format!("Manifest not found: {}", manifest.display()));
    }

    let source_path = project.resolve(source);
    if source_path.is_file() {
        report.record("source", true, format!("Found {}", source_path.display()));
    } else {
        report.record("source", false, format!("File not found: {}", source_path.display()));
    }

    let output_dir = project.resolve(output);
    let (passed, detail) = check_output_dir(&output_dir);
    report.record("output", passed, detail);

    report
}

fn check_output_dir(dir: &Path) -> (bool, String) {
    if !dir.exists() {
        return (true, format!("{} will be created", dir.display()));
    }
    if !dir.is_dir() {
        return (false, format!("{} exists and is not a directory", dir.display()));
    }
    match count_markdown_files(dir) {
        Ok(0) => (true, format!("{} has no .md files", dir.display())),
        Ok(n) => (
            false,
            format!("{} already contains {} .md file(s)", dir.display(), n),
        ),
        Err(e) => (false, format!("Cannot read {}: {}", dir.display(), e)),
    }
}

fn count_markdown_files(dir: &Path) -> std::io::Result<usize> {
    let mut count = 0;
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().map(|e| e == "md").unwrap_or(false) {
            count += 1;
        }
    }
    Ok(count)
}

/// Print a gate report
pub fn print_gate_report(report: &GateReport) {
    println!("=== Split Preconditions ===\n");
    for check in &report.checks {
        let mark = if check.passed { "ok" } else { "FAIL" };
        println!("  [{}] {}: {}", mark, check.name, check.detail);
    }
    println!();
    if report.passed() {
        println!("All conditions met.");
    } else {
        println!("Not safe to split.");
    }
}
