#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the repo-guard binary.
#[macro_export]
macro_rules! repo_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("repo-guard"))
    };
}

/// Creates a temporary repository tree for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Creates a file of exactly `len` bytes.
    pub fn create_file_with_size(&self, relative_path: &str, len: usize) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, vec![b'a'; len]).expect("Failed to write file");
    }

    /// Creates a directory in the temp directory.
    pub fn create_dir(&self, relative_path: &str) {
        let path = self.dir.path().join(relative_path);
        fs::create_dir_all(&path).expect("Failed to create directory");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a basic repo-guard config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".repo-guard.toml", content);
    }

    /// Creates a minimal monorepo skeleton that passes every rule.
    pub fn create_valid_repo(&self) {
        self.create_file("package.json", "{}\n");
        self.create_file("eslint.config.ts", "export default [];\n");
        self.create_file("packages/foo/package.json", "{}\n");
        self.create_file("packages/foo/src/index.ts", "export {};\n");
        self.create_file(
            "packages/foo/test/index.test.ts",
            "import {} from '../src';\n",
        );
    }
}
