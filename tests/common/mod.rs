//! Harness that runs a scaffold binary from an isolated copy.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding a private copy of one binary.
///
/// The binary scaffolds next to itself, so each test gets its own base.
pub struct Sandbox {
    _root: TempDir,
    exe: PathBuf,
    elsewhere: PathBuf,
}

impl Sandbox {
    pub fn new(built: &str) -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let root_path = fs::canonicalize(root.path()).expect("Failed to resolve temp directory");
        let base = root_path.join("proj");
        let elsewhere = root_path.join("cwd");
        fs::create_dir_all(&base).expect("Failed to create base directory");
        fs::create_dir_all(&elsewhere).expect("Failed to create working directory");

        let source = Path::new(built);
        let exe = base.join(source.file_name().expect("binary has a file name"));
        fs::copy(source, &exe).expect("Failed to copy binary into sandbox");

        Self { _root: root, exe, elsewhere }
    }

    /// Directory the copied binary lives in.
    pub fn base(&self) -> PathBuf {
        self.exe.parent().expect("binary has a parent").to_path_buf()
    }

    /// Command for the copied binary, run from a directory other than its own.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::new(&self.exe);
        cmd.current_dir(&self.elsewhere).env_remove("RUST_LOG");
        cmd
    }

    /// Whether anything was scaffolded into the working directory.
    pub fn cwd_untouched(&self) -> bool {
        !self.elsewhere.join("app").exists()
    }

    /// Expected `Created:` lines for the given folder specs, in order.
    pub fn created_lines(&self, specs: &[&str]) -> Vec<String> {
        specs
            .iter()
            .map(|spec| {
                let mut path = self.base();
                path.extend(spec.split('/'));
                format!("Created: {}", path.display())
            })
            .collect()
    }
}

pub fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .expect("stdout is UTF-8")
        .lines()
        .map(str::to_owned)
        .collect()
}
