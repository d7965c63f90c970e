//! Export model
//!
//! Every collector stage maps what it finds to an [`IncludedFile`] and pushes
//! it into an [`ExportSet`] before the document is rendered.

use std::path::PathBuf;

/// Outcome of reading one included file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// The decoded text, tagged with the fenced-code-block language
    Text { language: String, content: String },
    /// The file could not be read; `message` is the rendered I/O error
    Unreadable { message: String },
}

impl FileContent {
    pub fn is_unreadable(&self) -> bool {
        matches!(self, FileContent::Unreadable { .. })
    }
}

/// A file that made it into the export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludedFile {
    /// Path relative to the project root, using '/' as separator
    pub path: String,

    pub content: FileContent,
}

impl IncludedFile {
    pub fn new(path: impl Into<String>, content: FileContent) -> Self {
        Self {
            path: path.into(),
            content,
        }
    }
}

/// Ordered accumulator threaded through the pipeline stages
#[derive(Debug, Clone, Default)]
pub struct ExportSet {
    pub files: Vec<IncludedFile>,
}

impl ExportSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a file, keeping discovery order
    pub fn push(&mut self, file: IncludedFile) {
        self.files.push(file);
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Number of files exported as an error note instead of code
    pub fn unreadable_count(&self) -> usize {
        self.files
            .iter()
            .filter(|f| f.content.is_unreadable())
            .count()
    }

    /// Relative paths in discovery order
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.iter().map(|f| f.path.as_str())
    }
}

/// Fatal errors of an export run
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The project root could not be listed
    #[error("cannot list project root {path:?}: {source}")]
    ListRoot {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The generated document could not be written
    #[error("cannot write {path:?}: {source}")]
    WriteOutput {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// What a finished run produced
#[derive(Debug, Clone)]
pub struct ExportSummary {
    pub output_path: PathBuf,
    pub files: usize,
    pub unreadable: usize,
    pub bytes: usize,
}
