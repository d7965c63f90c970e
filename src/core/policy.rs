//! Inclusion policy
//!
//! The fixed allow-lists deciding what ends up in the exported document.
//! None of this is configurable at runtime.

use std::ffi::OsStr;

/// Name of the generated document, written into the project root
pub const OUTPUT_FILE_NAME: &str = "export_code.md";

/// File name suffixes kept while walking the included directories
pub const INCLUDED_EXTENSIONS: &[&str] = &[
    ".vue", ".js", ".ts", ".css", ".scss", ".html", ".json", ".md",
];

/// Files picked up directly inside the project root
pub const ROOT_FILES: &[&str] = &[
    "package.json",
    "index.html",
    "README.md",
    "jsconfig.json",
    "typed-router.d.ts",
    "vite.config.mjs",
];

/// Directories walked recursively, in this order
pub const INCLUDED_DIRS: &[&str] = &["src", "public"];

/// The set of rules applied by the collectors
#[derive(Debug, Clone, Copy)]
pub struct InclusionPolicy {
    pub extensions: &'static [&'static str],
    pub root_files: &'static [&'static str],
    pub dirs: &'static [&'static str],
}

impl Default for InclusionPolicy {
    fn default() -> Self {
        Self {
            extensions: INCLUDED_EXTENSIONS,
            root_files: ROOT_FILES,
            dirs: INCLUDED_DIRS,
        }
    }
}

impl InclusionPolicy {
    /// Whether a file directly under the root is exported (exact name match)
    pub fn is_root_file(&self, name: &str) -> bool {
        self.root_files.contains(&name)
    }

    /// Whether a walked file is exported.
    ///
    /// This is a plain suffix test on the raw file name: `bar.test.js` matches,
    /// `notes.md.bak` does not. Names that are not valid UTF-8 still match.
    pub fn has_included_extension(&self, name: impl AsRef<OsStr>) -> bool {
        let name = name.as_ref().as_encoded_bytes();
        self.extensions
            .iter()
            .any(|ext| name.ends_with(ext.as_bytes()))
    }
}
