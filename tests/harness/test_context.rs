//! Shared testing harness for `ktjar` integration tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
pub(crate) struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

impl TestContext {
    /// Create a new isolated environment.
    pub(crate) fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the workspace directory used for CLI invocations.
    pub(crate) fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `ktjar` binary in the work directory.
    pub(crate) fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("ktjar").expect("Failed to locate ktjar binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Same as [`cli`], with `bin_dir` prepended to PATH so collaborator
    /// stubs shadow the real tools.
    pub(crate) fn cli_with_path(&self, bin_dir: &Path) -> Command {
        let mut cmd = self.cli();
        let path = std::env::var("PATH").unwrap_or_default();
        cmd.env("PATH", format!("{}:{}", bin_dir.display(), path));
        cmd
    }

    /// Path inside the work directory.
    pub(crate) fn path<P: AsRef<Path>>(&self, relative: P) -> PathBuf {
        self.work_dir.join(relative)
    }

    /// Read a work-directory file to a string.
    pub(crate) fn read_file<P: AsRef<Path>>(&self, relative: P) -> String {
        let path = self.path(relative);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// List the file names in a work-directory subdirectory, sorted.
    pub(crate) fn list_dir<P: AsRef<Path>>(&self, relative: P) -> Vec<String> {
        let path = self.path(relative);
        let mut names: Vec<String> = fs::read_dir(&path)
            .unwrap_or_else(|e| panic!("Failed to list {}: {}", path.display(), e))
            .map(|entry| entry.expect("dir entry").file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
