//! File reading for the export
//!
//! Provides consistent handling for:
//! - Non-UTF-8 bytes (dropped, never fatal)
//! - Windows and old Mac line endings
//! - Read failures (turned into an inline note)

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::model::{FileContent, IncludedFile};

/// Decode bytes as UTF-8, silently dropping invalid sequences
pub fn decode_lossy(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => bytes.utf8_chunks().map(|chunk| chunk.valid()).collect(),
    }
}

/// Convert `\r\n` and lone `\r` to `\n`
pub fn normalize_newlines(s: &str) -> String {
    if !s.contains('\r') {
        return s.to_string();
    }
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Fenced-code-block language for a file name.
///
/// The text after the last dot, ignoring leading dots of the name:
/// `typed-router.d.ts` gives `ts`, `.eslintrc` gives nothing.
pub fn language_tag(file_name: &str) -> &str {
    let stem_start = file_name.len() - file_name.trim_start_matches('.').len();
    match file_name[stem_start..].rfind('.') {
        Some(dot) => &file_name[stem_start + dot + 1..],
        None => "",
    }
}

/// Read a file as text
pub fn read_text(path: &Path) -> std::io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(normalize_newlines(&decode_lossy(&bytes)))
}

/// Read an included file and wrap the outcome for the renderer.
///
/// `relative` is the root-relative path shown in the document.
pub fn read_included(path: &Path, relative: String) -> IncludedFile {
    let content = match read_text(path) {
        Ok(content) => {
            let file_name = relative.rsplit('/').next().unwrap_or(relative.as_str());
            debug!(path = %relative, bytes = content.len(), "included file");
            FileContent::Text {
                language: language_tag(file_name).to_string(),
                content,
            }
        }
        Err(err) => {
            warn!(path = %relative, error = %err, "cannot read file");
            FileContent::Unreadable {
                message: err.to_string(),
            }
        }
    };

    IncludedFile::new(relative, content)
}
