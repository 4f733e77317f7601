//! Shared helpers for rule-check tests: on-disk temp trees and compiled
//! rule tables.

use std::fs;
use std::path::Path;

use tempfile::TempDir;

use crate::config::Config;

use super::CompiledRules;

/// A temporary repository tree built from relative paths.
pub struct TempTree {
    dir: TempDir,
}

impl Default for TempTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TempTree {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Create a file (and its parent directories) with trivial content.
    pub fn file(&self, relative_path: &str) -> &Self {
        self.file_with_bytes(relative_path, b"x")
    }

    /// Create a file of exactly `len` bytes.
    pub fn file_with_size(&self, relative_path: &str, len: usize) -> &Self {
        let content = vec![b'a'; len];
        self.file_with_bytes(relative_path, &content)
    }

    pub fn file_with_bytes(&self, relative_path: &str, content: &[u8]) -> &Self {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create parent directories");
        }
        fs::write(&path, content).expect("write file");
        self
    }

    /// Create a directory.
    pub fn dir(&self, relative_path: &str) -> &Self {
        fs::create_dir_all(self.dir.path().join(relative_path)).expect("create directory");
        self
    }
}

/// Compiled tables for the default configuration.
pub fn default_rules() -> CompiledRules {
    CompiledRules::from_config(&Config::default()).expect("default config compiles")
}

/// Compiled tables for a tweaked configuration.
pub fn rules_with(tweak: impl FnOnce(&mut Config)) -> CompiledRules {
    let mut config = Config::default();
    tweak(&mut config);
    CompiledRules::from_config(&config).expect("config compiles")
}
