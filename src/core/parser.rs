//! Glossary parsing: splitting on the delimiter, reading term labels, and
//! deriving filenames from them.

use regex::Regex;
use tracing::debug;

use crate::models::{ParsedGlossary, TermSection};

/// Closing marker of a term label
pub const LABEL_CLOSE: &str = "]]";

/// Parser for delimiter-marked glossaries such as `[[def: Term, alias]]`
pub struct GlossaryParser {
    delimiter: String,
    /// `<delimiter> <label>]]` anywhere in the document
    labels_re: Regex,
    /// ` <label>]]` at the start of a section body
    header_re: Regex,
}

impl GlossaryParser {
    pub fn new(delimiter: &str) -> Self {
        let close = regex::escape(LABEL_CLOSE);
        let labels_re = Regex::new(&format!(r"{} (.*?){}", regex::escape(delimiter), close))
            .expect("escaped delimiter is a valid pattern");
        let header_re = Regex::new(&format!(r"^ (.*?){}", close)).expect("escaped marker is a valid pattern");
        Self {
            delimiter: delimiter.to_string(),
            labels_re,
            header_re,
        }
    }

    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Split the document into its introduction and term sections.
    ///
    /// Everything before the first delimiter is the introduction. Each
    /// section's label is read from its own header, so a section with a
    /// malformed header never shifts the labels of the sections after it.
    pub fn parse(&self, text: &str) -> ParsedGlossary {
        let mut fragments = text.split(self.delimiter.as_str());
        let intro = fragments.next().unwrap_or_default().to_string();

        let sections: Vec<TermSection> = fragments
            .enumerate()
            .map(|(i, body)| TermSection {
                index: i + 1,
                label: self.section_label(body),
                body: body.to_string(),
            })
            .collect();

        debug!(
            "Parsed glossary: {} byte intro, {} term sections",
            intro.len(),
            sections.len()
        );

        ParsedGlossary { intro, sections }
    }

    /// All term labels in document order
    pub fn extract_labels(&self, text: &str) -> Vec<String> {
        self.labels_re
            .captures_iter(text)
            .filter_map(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
            .collect()
    }

    fn section_label(&self, body: &str) -> Option<String> {
        self.header_re
            .captures(body)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Derive the filename stem for a term label.
///
/// Aliases after the first comma are ignored; path separators and spaces
/// become hyphens and the result is lowercased.
pub fn slugify(label: &str) -> String {
    let name = label.split(',').next().unwrap_or(label);
    name.replace(',', "")
        .replace(['/', '\\'], "-")
        .replace(' ', "-")
        .to_lowercase()
}
