//! export-code - export a web project's sources into one Markdown document
//!
//! export-code provides:
//! - A fixed inclusion policy (root files, src/ and public/ by extension)
//! - Deterministic, sorted traversal
//! - A Markdown document with a table of contents and one fenced block per file

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli::init_tracing(&cli);
    cli::run(cli)
}
