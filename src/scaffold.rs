use std::io::Write;

use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use tracing::debug;

use crate::layout::{Layout, relative_path};
use crate::util::fs::ensure_dir;

/// Outcome of a successful scaffolding run.
#[derive(Debug, Default)]
pub struct Report {
    /// Absolute paths in layout order.
    pub created: Vec<Utf8PathBuf>,
    /// How many of those were already present before the run.
    pub existing: usize,
}

/// Create every folder of `layout` under `base`, reporting each to `out`.
///
/// Stops at the first folder that cannot be created; folders created before
/// it stay on disk.
pub fn scaffold<W: Write>(base: &Utf8Path, layout: &Layout, out: &mut W) -> Result<Report> {
    let mut report = Report::default();

    for spec in layout.folders {
        let target = base.join(relative_path(spec)?);
        let existed =
            ensure_dir(&target).with_context(|| format!("creating directory {target}"))?;
        debug!(folder = %target, existed, "ensured folder");

        writeln!(out, "Created: {target}").context("writing scaffold report")?;
        if existed {
            report.existing += 1;
        }
        report.created.push(target);
    }

    writeln!(out, "{}", layout.completion_message()).context("writing scaffold report")?;
    Ok(report)
}
