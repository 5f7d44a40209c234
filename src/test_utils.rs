//! Test utilities for creating temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is automatically cleaned up when dropped.
pub struct TestTree {
    dir: TempDir,
}

impl TestTree {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories as needed.
    pub fn add_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Create a (possibly nested) empty directory.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Create `width` files and `width` subdirectories per level, `depth` levels deep.
    pub fn populate(&self, width: usize, depth: usize) {
        fn fill(dir: &Path, width: usize, depth: usize) {
            for i in 0..width {
                fs::write(dir.join(format!("file_{i:03}.txt")), "x".repeat(i))
                    .expect("Failed to write file");
            }
            if depth == 0 {
                return;
            }
            for i in 0..width {
                let sub = dir.join(format!("dir_{i:03}"));
                fs::create_dir_all(&sub).expect("Failed to create dir");
                fill(&sub, width, depth - 1);
            }
        }
        fill(self.dir.path(), width, depth);
    }
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}
