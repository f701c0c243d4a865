//! Common test utilities for fm2pm integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// A temporary project with an input directory and a Maven layout repository
pub struct TestWorkspace {
    /// Temporary directory
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
        file_path
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Root of the workspace's repository
    pub fn repository(&self) -> PathBuf {
        self.path.join("repository")
    }

    /// Root of the workspace's (empty unless populated) local repository
    pub fn local_repository(&self) -> PathBuf {
        self.path.join("m2")
    }

    /// Install a feature document into the repository in Maven layout
    ///
    /// `group` uses dots, the file gets the `slingosgifeature` extension.
    pub fn install_feature(&self, group: &str, name: &str, version: &str, json: &str) -> PathBuf {
        let relative = format!(
            "repository/{}/{name}/{version}/{name}-{version}.slingosgifeature",
            group.replace('.', "/")
        );
        self.write_file(&relative, json)
    }

    /// `fm2pm convert` command wired to this workspace's repositories
    pub fn convert_cmd(&self, input: &str, output: &str) -> Command {
        let mut cmd = fm2pm_cmd();
        cmd.current_dir(&self.path)
            .arg("convert")
            .arg("--input")
            .arg(input)
            .arg("--output")
            .arg(output)
            .arg("--local-repository")
            .arg(self.local_repository())
            .arg("--repository")
            .arg(self.repository());
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

/// Command for the real fm2pm binary, isolated from the developer's environment
#[allow(deprecated)]
pub fn fm2pm_cmd() -> Command {
    let mut cmd = Command::cargo_bin("fm2pm").expect("fm2pm binary should be built");
    cmd.env_remove("FM2PM_CONFIG");
    cmd.env_remove("FM2PM_LOCAL_REPOSITORY");
    cmd.env_remove("RUST_LOG");
    cmd
}

/// Lines of a provisioning model that open a feature block
pub fn feature_headers(model: &str) -> Vec<String> {
    model
        .lines()
        .filter(|l| l.starts_with("[feature "))
        .map(str::to_string)
        .collect()
}

/// Whether `path` is an existing, non-empty file
pub fn is_non_empty_file(path: &Path) -> bool {
    std::fs::metadata(path).is_ok_and(|m| m.is_file() && m.len() > 0)
}
