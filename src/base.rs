use anyhow::{Context, Result, anyhow};
use camino::Utf8PathBuf;

use crate::util::fs::canonical_utf8;

/// Directory containing the running executable, resolved to an absolute path.
///
/// Folders are always scaffolded next to the binary, regardless of the
/// process working directory.
pub fn executable_dir() -> Result<Utf8PathBuf> {
    let exe = std::env::current_exe().context("locating the running executable")?;
    let exe = canonical_utf8(&exe)?;
    exe.parent()
        .map(|dir| dir.to_owned())
        .ok_or_else(|| anyhow!("executable has no parent directory: {exe}"))
}
