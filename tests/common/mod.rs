//! Common test utilities for rejoin integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const UTF8_BOM: &str = "\u{feff}";

/// A scratch directory holding input and output CSV files
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Read a CSV written by rejoin, asserting and stripping its BOM
    pub fn read_csv(&self, path: &str) -> String {
        let content = self.read_file(path);
        content
            .strip_prefix(UTF8_BOM)
            .unwrap_or_else(|| panic!("{path} has no BOM"))
            .to_string()
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Write the usual train/test pair
    pub fn write_train_test(&self) {
        self.write_file(
            "train.csv",
            "id,date,target\n1,2021-01-01,10\n2,2021-06-15 13:45:00,20\n",
        );
        self.write_file("test.csv", "id,date\n3,2021-12-31\n");
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn rejoin_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rejoin").unwrap();
    cmd.env_remove("REJOIN_OUTPUT_DIR").env_remove("REJOIN_LOG");
    cmd
}

/// rejoin command running inside `dir`
#[allow(dead_code)]
pub fn rejoin_cmd_in(dir: &Path) -> Command {
    let mut cmd = rejoin_cmd();
    cmd.current_dir(dir);
    cmd
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workspace_creation() {
        let workspace = TestWorkspace::new();
        assert!(workspace.path.exists());
    }

    #[test]
    fn test_workspace_file_operations() {
        let workspace = TestWorkspace::new();
        workspace.write_file("nested/file.csv", "a\n1\n");
        assert!(workspace.file_exists("nested/file.csv"));
        assert_eq!(workspace.read_file("nested/file.csv"), "a\n1\n");
    }
}
