//! Renderer module
//!
//! Assembles the Markdown document: a table of contents followed by one
//! `##` section per included file, both in discovery order.

use std::fmt::Write as _;

use crate::core::model::{ExportSet, FileContent, IncludedFile};
use crate::core::paths::slugify_anchor;

/// Heading of the table of contents
pub const TOC_TITLE: &str = "# Table des matières";

/// Render the full document
pub fn render_document(set: &ExportSet) -> String {
    let mut output = render_toc(set);
    for file in &set.files {
        output.push_str(&render_section(file));
    }
    output
}

/// Render the table of contents, including the trailing blank line
pub fn render_toc(set: &ExportSet) -> String {
    let mut output = String::new();
    output.push_str(TOC_TITLE);
    output.push_str("\n\n");
    for path in set.paths() {
        let _ = writeln!(output, "- [{}](#{})", path, slugify_anchor(path));
    }
    output.push('\n');
    output
}

/// Render one body section
pub fn render_section(file: &IncludedFile) -> String {
    let mut output = format!("## {}\n\n", file.path);
    match &file.content {
        FileContent::Text { language, content } => {
            let _ = write!(output, "```{}\n{}\n```\n\n", language, content);
        }
        FileContent::Unreadable { message } => {
            let _ = write!(
                output,
                "*Impossible de lire le fichier {} : {}*\n\n",
                file.path, message
            );
        }
    }
    output
}
