//! clang-format replacement extraction and compiler-style reporting.
//!
//! clang-format reports suggested edits as a replacement list: byte offset,
//! byte length, replacement text. To print them like compiler warnings they
//! are mapped back to (line, column) positions by scanning the cumulative
//! newline offsets of the original file content.

use std::path::Path;

use crate::error::{Error, Result};

/// A single formatting edit suggested by clang-format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Byte offset of the edit in the original file content.
    pub offset: usize,
    /// Number of bytes replaced.
    pub length: usize,
    /// Replacement text; empty for pure deletions.
    pub text: String,
}

/// A replacement mapped back to a position in the source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based column index.
    pub column: usize,
    /// Original text at the replacement site.
    pub found: String,
    /// Text clang-format wants instead.
    pub expected: String,
}

impl Diagnostic {
    /// Absolute difference in character count between found and expected.
    pub fn character_diff(&self) -> usize {
        self.found
            .chars()
            .count()
            .abs_diff(self.expected.chars().count())
    }
}

/// Parse the `--output-replacements-xml` document emitted by clang-format.
///
/// Empty output means the file is already formatted.
pub fn parse_replacements(xml: &str) -> Result<Vec<Replacement>> {
    if xml.trim().is_empty() {
        return Ok(Vec::new());
    }
    let doc = roxmltree::Document::parse(xml).map_err(|source| Error::ReplacementXml {
        program: "clang-format".into(),
        source,
    })?;

    let mut replacements = Vec::new();
    for node in doc
        .descendants()
        .filter(|n| n.has_tag_name("replacement"))
    {
        let offset = node
            .attribute("offset")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let length = node
            .attribute("length")
            .and_then(|v| v.parse().ok())
            .unwrap_or(0);
        let text = node.text().unwrap_or("").to_string();
        replacements.push(Replacement {
            offset,
            length,
            text,
        });
    }
    Ok(replacements)
}

/// Map replacements back to (line, column) positions in `content`.
///
/// A replacement that spans or touches several lines is reported on the line
/// containing its start offset.
pub fn map_replacements(content: &str, replacements: &[Replacement]) -> Vec<Diagnostic> {
    // line_starts[i] is the byte offset of the first character of line i.
    let mut line_starts = vec![0usize];
    for (idx, byte) in content.bytes().enumerate() {
        if byte == b'\n' {
            line_starts.push(idx + 1);
        }
    }

    let mut diagnostics = Vec::new();
    for replacement in replacements {
        let offset = replacement.offset.min(content.len());
        let line = match line_starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let column = offset - line_starts[line];
        let end = (offset + replacement.length).min(content.len());
        let found = content.get(offset..end).unwrap_or_default().to_string();
        diagnostics.push(Diagnostic {
            line,
            column,
            found,
            expected: replacement.text.clone(),
        });
    }
    diagnostics
}

/// Render one diagnostic as a compiler-style warning/error line.
pub fn render(path: &Path, diagnostic: &Diagnostic, warnings_as_errors: bool) -> String {
    let severity = if warnings_as_errors {
        "\x1b[91merror:"
    } else {
        "\x1b[35mwarning:"
    };
    let found = diagnostic.found.replace('\n', "\\n");
    let expected = diagnostic.expected.replace('\n', "\\n");
    format!(
        "\x1b[1m\x1b[97m{path}:{line}:{column}: {severity}\x1b[97m clang-format\x1b[0m  \
         Found: '{found}', Expected: '{expected}', CharacterDiff: '{diff}'",
        path = path.display(),
        line = diagnostic.line + 1,
        column = diagnostic.column + 1,
        diff = diagnostic.character_diff(),
    )
}
