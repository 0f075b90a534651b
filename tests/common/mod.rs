//! Shared testing utilities for prefab CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Testing harness providing an isolated working directory with a template
/// sets root.
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

    /// Path to the working directory CLI invocations run in.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Path to the default template sets root inside the working directory.
    pub fn sets_root(&self) -> PathBuf {
        self.work_dir.join(".prefab")
    }

    /// Build a command for invoking the compiled `prefab` binary within the
    /// working directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("prefab").expect("Failed to locate prefab binary");
        cmd.current_dir(&self.work_dir);
        cmd
    }

    /// Write one file of a template set under the default sets root.
    pub fn write_set_file(&self, set: &str, rel: &str, content: &str) {
        let path = self.sets_root().join(set).join(rel);
        fs::create_dir_all(path.parent().expect("set file path has a parent")).unwrap();
        fs::write(path, content).unwrap();
    }

    /// Write the sets root configuration file.
    pub fn write_config(&self, content: &str) {
        fs::create_dir_all(self.sets_root()).unwrap();
        fs::write(self.sets_root().join("config.toml"), content).unwrap();
    }

    /// Read a rendered file relative to the working directory.
    pub fn read_output(&self, rel: &str) -> String {
        fs::read_to_string(self.work_dir.join(rel)).unwrap()
    }

    /// Whether a path exists relative to the working directory.
    pub fn output_exists(&self, rel: &str) -> bool {
        self.work_dir.join(rel).exists()
    }
}
