use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::layout::Layout;
use crate::{base, logging, scaffold};

/// Both binaries take no arguments; clap still provides `--help` and `--version`.
#[derive(Parser, Debug)]
#[command(version, about = "Create the project folder layout next to this executable")]
pub struct Cli {}

/// Shared entry point so each binary's `main` stays a one-liner.
pub fn run(layout: &Layout) -> Result<()> {
    logging::init();
    let _ = Cli::parse();

    let base = base::executable_dir()?;
    let report = scaffold::scaffold(&base, layout, &mut std::io::stdout().lock())?;
    info!(
        layout = layout.name,
        base = %base,
        folders = report.created.len(),
        existing = report.existing,
        "scaffold complete"
    );
    Ok(())
}
