//! Shared testing utilities for mkgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `mkgen` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("mkgen").expect("Failed to locate mkgen binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Run `mkgen` with the two answers piped on stdin and assert success.
    pub fn generate(&self, application: &str, registry: &str, args: &[&str]) {
        self.cli()
            .args(args)
            .write_stdin(format!("{application}\n{registry}\n"))
            .assert()
            .success();
    }

    pub fn makefile_path(&self) -> PathBuf {
        self.work_dir.join("Makefile")
    }

    /// Read the generated `Makefile`.
    pub fn read_makefile(&self) -> String {
        fs::read_to_string(self.makefile_path()).expect("Makefile should exist")
    }

    pub fn assert_makefile_not_exists(&self) {
        assert!(!self.makefile_path().exists(), "Makefile should not exist");
    }
}
