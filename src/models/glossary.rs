use std::path::PathBuf;

/// One fragment of the glossary after splitting on the delimiter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermSection {
    /// 1-based position among the term sections
    pub index: usize,
    /// Label from the section's `[[def: ...]]` header, aliases included
    pub label: Option<String>,
    /// Section text after the delimiter, verbatim
    pub body: String,
}

/// The glossary split into its introduction and term sections
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedGlossary {
    pub intro: String,
    pub sections: Vec<TermSection>,
}

/// A file the split will write
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    /// Path relative to the project root
    pub path: PathBuf,
    /// Entry inserted into `markdown_paths`
    pub manifest_entry: String,
    pub content: String,
}

/// A term file, with the label it came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TermFile {
    pub label: String,
    pub slug: String,
    pub file: PlannedFile,
}

/// Two terms that mapped to the same filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collision {
    pub filename: String,
    pub first: String,
    pub second: String,
}

/// Everything a split does, computed before anything touches the disk
#[derive(Debug, Clone)]
pub struct SplitPlan {
    /// Glossary path as listed in the manifest
    pub source: String,
    pub intro: PlannedFile,
    pub terms: Vec<TermFile>,
    /// Indices of sections dropped for lack of a label
    pub skipped: Vec<usize>,
    pub collisions: Vec<Collision>,
    /// The first spec's `markdown_paths` after the splice
    pub markdown_paths: Vec<String>,
}

impl SplitPlan {
    /// Number of files the plan writes, the introduction included
    pub fn file_count(&self) -> usize {
        self.terms.len() + 1
    }
}
