use crate::error::{Result, RulemapError};
use crate::types::SectionCode;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// The raw text of one specification under evaluation.
#[derive(Debug, Clone)]
pub struct Document {
    path: Option<PathBuf>,
    text: String,
}

impl Document {
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(RulemapError::DocumentNotFound(path.to_path_buf()));
        }
        let text = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "loaded document");
        Ok(Self {
            path: Some(path.to_path_buf()),
            text,
        })
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            path: None,
            text: text.into(),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn headings(&self) -> Vec<Heading<'_>> {
        headings(&self.text)
    }

    /// Text span of `code`'s section, or `None` if its heading never appears.
    pub fn section(&self, code: SectionCode) -> Option<&str> {
        locate_section(&self.text, code.heading())
    }
}

// ---------------------------------------------------------------------------
// Heading
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heading<'a> {
    /// Number of leading `#` characters.
    pub level: usize,
    /// Text after the `#` run, trimmed.
    pub text: &'a str,
    /// Byte offset of the start of the heading line.
    pub offset: usize,
}

/// Parse `line` as a heading. A heading is any line whose first non-blank
/// character is `#`.
fn parse_heading(line: &str, offset: usize) -> Option<Heading<'_>> {
    let trimmed = line.trim_start();
    if !trimmed.starts_with('#') {
        return None;
    }
    let text = trimmed.trim_start_matches('#');
    Some(Heading {
        level: trimmed.len() - text.len(),
        text: text.trim(),
        offset,
    })
}

/// All heading lines in `text`, in document order.
pub fn headings(text: &str) -> Vec<Heading<'_>> {
    let mut out = Vec::new();
    let mut offset = 0;
    for line in text.split_inclusive('\n') {
        if let Some(h) = parse_heading(line, offset) {
            out.push(h);
        }
        offset += line.len();
    }
    out
}

fn starts_with_ignore_case(haystack: &str, prefix: &str) -> bool {
    haystack
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Locate the section introduced by the first heading whose text begins
/// with `heading` (case-insensitive).
///
/// The span runs from the start of that heading line up to the start of the
/// next heading line of any level, or to the end of the document. A
/// sub-heading inside a section therefore ends the section.
pub fn locate_section<'a>(text: &'a str, heading: &str) -> Option<&'a str> {
    let all = headings(text);
    let idx = all
        .iter()
        .position(|h| starts_with_ignore_case(h.text, heading))?;
    let start = all[idx].offset;
    let end = all.get(idx + 1).map_or(text.len(), |next| next.offset);
    tracing::debug!(heading, start, end, "located section");
    Some(&text[start..end])
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
