//! Export flow
//!
//! Root files, then the walked directories, then the document is rendered
//! and written to `export_code.md` in the root. Each stage takes the
//! accumulator from the previous one.

use std::fs;
use std::path::Path;

use colored::Colorize;
use tracing::{info, warn};

use crate::backends::scan::{collect_root_files, walk_dirs};
use crate::core::model::{ExportError, ExportSet, ExportSummary};
use crate::core::policy::{InclusionPolicy, OUTPUT_FILE_NAME};
use crate::core::render::render_document;

/// Collect everything the policy selects under `root`
pub fn collect(root: &Path, policy: &InclusionPolicy) -> Result<ExportSet, ExportError> {
    let set = collect_root_files(root, policy, ExportSet::new())?;
    Ok(walk_dirs(root, policy, set))
}

/// Run the whole export and write the document
pub fn export_project(root: &Path) -> Result<ExportSummary, ExportError> {
    let policy = InclusionPolicy::default();
    let set = collect(root, &policy)?;
    if set.is_empty() {
        warn!(root = %root.display(), "no matching files found");
    }
    let document = render_document(&set);

    let output_path = root.join(OUTPUT_FILE_NAME);
    fs::write(&output_path, &document).map_err(|source| ExportError::WriteOutput {
        path: output_path.clone(),
        source,
    })?;

    info!(
        path = %output_path.display(),
        files = set.len(),
        bytes = document.len(),
        "document written"
    );

    Ok(ExportSummary {
        output_path,
        files: set.len(),
        unreadable: set.unreadable_count(),
        bytes: document.len(),
    })
}

/// Run the export command
pub fn run_export(root: &Path, quiet: bool) -> anyhow::Result<()> {
    let summary = export_project(root)?;

    if !quiet {
        print_summary(&summary);
    }

    Ok(())
}

fn print_summary(summary: &ExportSummary) {
    if summary.files == 0 {
        eprintln!(
            "{} no matching files, wrote an empty table of contents to {}",
            "!".yellow().bold(),
            summary.output_path.display()
        );
        return;
    }

    eprintln!(
        "{} exported {} files ({} bytes) to {}",
        "✓".green().bold(),
        summary.files,
        summary.bytes,
        summary.output_path.display()
    );
    if summary.unreadable > 0 {
        eprintln!(
            "  {} {} file(s) could not be read, see the notes in the document",
            "⚠".yellow(),
            summary.unreadable
        );
    }
}
