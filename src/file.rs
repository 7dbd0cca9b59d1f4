//! Loading and saving documents.

use std::fs;
use std::path::Path;

use crate::buffer::Document;
use crate::error::{EditorError, Result};

/// Statistics from a successful save, reported on the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteStats {
    pub lines: usize,
    pub bytes: usize,
}

impl WriteStats {
    /// The status-line message for this save.
    pub fn message(&self, path: &str) -> String {
        format!("\"{}\" {}L, {}B", path, self.lines, self.bytes)
    }
}

/// Read a file into a document. A missing or unreadable file is an
/// error; creating new files goes through save, not load.
pub fn read_file(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path).map_err(|source| EditorError::FileOpen {
        path: path.display().to_string(),
        source,
    })?;
    let mut doc = Document::from_text(&text);
    doc.ensure_non_empty();
    Ok(doc)
}

/// Write the document to a file, truncating any previous content. Every
/// line is terminated by a newline, including the last.
pub fn write_file(doc: &Document, path: &Path) -> Result<WriteStats> {
    let text = doc.to_text();
    fs::write(path, &text)?;
    Ok(WriteStats {
        lines: doc.line_count(),
        bytes: text.len(),
    })
}
