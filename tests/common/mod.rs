//! Shared testing utilities for recomp CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated directory for CLI exercises.
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

    /// Path to the directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `recomp` binary within the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("recomp").expect("Failed to locate recomp binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Path to a scaffolded component directory.
    pub fn component_path(&self, name: &str) -> PathBuf {
        self.work_dir.join(name)
    }

    /// Write a `recomp.toml` into the work directory.
    pub fn write_config(&self, contents: &str) {
        fs::write(self.work_dir.join("recomp.toml"), contents)
            .expect("Failed to write recomp.toml");
    }

    /// Read a file out of a scaffolded component directory.
    pub fn read_component_file(&self, name: &str, file: &str) -> String {
        fs::read_to_string(self.component_path(name).join(file))
            .expect("Failed to read scaffolded file")
    }

    /// Assert that the named files exist in the component directory.
    pub fn assert_component_files(&self, name: &str, files: &[&str]) {
        let dir = self.component_path(name);
        for file in files {
            assert!(dir.join(file).exists(), "{} should exist in {}", file, dir.display());
        }
    }

    /// Number of entries in the work directory.
    pub fn work_dir_entries(&self) -> usize {
        fs::read_dir(&self.work_dir).expect("Failed to list work directory").count()
    }
}
