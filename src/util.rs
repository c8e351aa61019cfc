/// Filesystem helpers shared by the scaffolder and base directory lookup.
pub mod fs {
    use std::fs;
    use std::io;
    use std::path::Path;

    use anyhow::{Context, anyhow};
    use camino::{Utf8Path, Utf8PathBuf};

    /// Ensure a directory exists, creating it recursively if needed.
    ///
    /// Returns `true` when the directory was already present.
    pub fn ensure_dir(path: &Utf8Path) -> io::Result<bool> {
        if path.is_dir() {
            return Ok(true);
        }
        fs::create_dir_all(path)?;
        Ok(false)
    }

    /// Canonicalize a path and require the result to be UTF-8.
    pub fn canonical_utf8(path: &Path) -> anyhow::Result<Utf8PathBuf> {
        let canonical = fs::canonicalize(path)
            .with_context(|| format!("resolving path {}", path.display()))?;
        Utf8PathBuf::from_path_buf(canonical)
            .map_err(|p| anyhow!("path not valid UTF-8: {}", p.display()))
    }
}
