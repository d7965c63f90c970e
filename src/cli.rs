//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// export-code - dump a web project's sources into one Markdown document.
#[derive(Parser, Debug)]
#[command(name = "export-code")]
#[command(
    author,
    version,
    about,
    long_about = r#"export-code collects the key files of a web project and writes them into a
single Markdown document, export_code.md, at the project root.

What gets exported (fixed, not configurable):
- root files: package.json, index.html, README.md, jsconfig.json,
  typed-router.d.ts, vite.config.mjs
- everything under src/ and public/ ending in .vue, .js, .ts, .css, .scss,
  .html, .json or .md

The document starts with a table of contents linking to one section per file.

Examples:
    export-code
    export-code --root ../my-app
    export-code -v
"#
)]
pub struct Cli {
    /// Project root to export.
    #[arg(
        long,
        default_value = ".",
        value_name = "ROOT",
        long_help = "Project root to export (defaults to the current directory).\n\n\
All paths in the document are relative to this root, and export_code.md is\n\
written into it."
    )]
    pub root: PathBuf,

    /// Verbose mode (repeat for more diagnostics).
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        long_help = "Raise the log level on stderr: -v logs progress, -vv logs every\n\
included file. RUST_LOG overrides this when set."
    )]
    pub verbose: u8,

    /// Quiet mode (errors only, no summary).
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        long_help = "Only log errors and skip the summary line printed after the export."
    )]
    pub quiet: bool,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output in the summary line. This is useful when\n\
redirecting stderr to a file."
    )]
    pub no_color: bool,
}

/// Initialize tracing based on CLI flags
pub fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = if cli.quiet {
        "export_code=error"
    } else {
        match cli.verbose {
            0 => "export_code=warn",
            1 => "export_code=info",
            _ => "export_code=debug",
        }
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    if cli.no_color {
        colored::control::set_override(false);
    }

    let root = cli
        .root
        .canonicalize()
        .with_context(|| format!("project root {} is not accessible", cli.root.display()))?;

    crate::flows::export::run_export(&root, cli.quiet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["export-code"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("."));
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_verbose_counts() {
        let cli = Cli::try_parse_from(["export-code", "-vv", "--root", "app"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.root, PathBuf::from("app"));
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["export-code", "-q", "-v"]).is_err());
    }

    #[test]
    fn test_rejects_positional_arguments() {
        assert!(Cli::try_parse_from(["export-code", "src"]).is_err());
    }
}
