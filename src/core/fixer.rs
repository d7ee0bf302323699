use std::fs;
use std::path::Path;
use tracing::info;

/// In-place repair of known formatting issues in a glossary file.
///
/// Implementations must be idempotent and must not move term boundaries.
pub trait ContentFixer {
    /// Repaired text, or `None` when nothing needs fixing
    fn fix(&self, text: &str) -> Option<String>;

    /// Apply the fix to a file on disk. Returns whether the file changed.
    fn fix_file(&self, path: &Path) -> std::io::Result<bool> {
        let text = fs::read_to_string(path)?;
        match self.fix(&text) {
            Some(fixed) if fixed != text => {
                fs::write(path, fixed)?;
                info!("Fixed formatting in {}", path.display());
                Ok(true)
            }
            _ => Ok(false),
        }
    }
}

/// Strips a UTF-8 byte order mark and converts CRLF line endings to LF
#[derive(Debug, Default, Clone, Copy)]
pub struct LineEndingFixer;

impl ContentFixer for LineEndingFixer {
    fn fix(&self, text: &str) -> Option<String> {
        let without_bom = text.strip_prefix('\u{feff}').unwrap_or(text);
        if without_bom.len() == text.len() && !text.contains("\r\n") {
            return None;
        }
        Some(without_bom.replace("\r\n", "\n"))
    }
}
