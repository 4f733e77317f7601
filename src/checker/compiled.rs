//! Compiled rule tables for structure checking.
//!
//! All match tables (extension sets, path patterns, name patterns) are
//! compiled once from the loaded configuration and passed as data into
//! every rule, so projects extend them via `.repo-guard.toml` without
//! touching rule logic.

use std::collections::HashSet;

use globset::{Glob, GlobMatcher};
use regex::{Regex, RegexSet};

use crate::config::Config;
use crate::error::{RepoGuardError, Result};

/// The workspace package manifest filename.
pub const MANIFEST_FILE_NAME: &str = "package.json";

/// Directory holding all workspace packages.
pub const PACKAGES_DIR: &str = "packages";

/// Extensions treated as source files by the location rule.
pub const SOURCE_EXTENSIONS: &[&str] = &["ts", "tsx", "mts", "cts"];

/// Root-level source filenames always exempt from location rules.
pub const DEFAULT_ROOT_SOURCE_FILES: &[&str] = &[
    "eslint.config.ts",
    "prettier.config.ts",
    "vitest.config.ts",
    "tsup.config.ts",
];

/// Directories pruned from every full-tree walk.
pub const WALK_SKIP_DIRS: &[&str] = &["node_modules", ".git", "dist", "coverage"];

/// Hook directories additionally pruned by the shell-script rule.
pub const HOOK_DIRS: &[&str] = &[".husky"];

/// Extensions of the shell/batch/PowerShell family.
pub const SHELL_EXTENSIONS: &[&str] = &["sh", "bash", "zsh", "bat", "cmd", "ps1"];

/// Uncompressed size budget for test fixtures, in kilobytes.
pub const FIXTURE_SIZE_LIMIT_KB: f64 = 100.0;

/// Filename suffixes exempt from the fixture size budget.
pub const COMPRESSED_FIXTURE_SUFFIXES: &[&str] = &[".zip", ".tar", ".gz", ".tgz", ".tar.gz"];

/// Directory name flagged by the committed-staging rule.
pub const STAGING_DIR_NAME: &str = "staging";

/// Built-in per-package location patterns for source files.
const BUILTIN_PACKAGE_PATH_PATTERNS: &[&str] = &[
    r"^packages/[^/]+/src/",
    r"^packages/[^/]+/test/",
    r"^packages/[^/]+/examples/",
    r"^packages/[^/]+/generated/",
    r"^packages/[^/]+/scripts/",
    r"^packages/[^/]+/[^/]+\.config\.(ts|mts|cts)$",
];

/// All rule tables, compiled once per run from the loaded configuration.
#[derive(Debug)]
pub struct CompiledRules {
    allowed_scripts_packages: HashSet<String>,
    no_examples: Vec<GlobMatcher>,
    allowed_root_files: HashSet<String>,
    package_paths: RegexSet,
    package_manifest: Regex,
    fixture_subtree: Regex,
}

impl CompiledRules {
    /// Compile the rule tables from a loaded configuration.
    ///
    /// # Errors
    /// Returns an error if a configured name pattern is not a valid glob
    /// or a configured path pattern is not a valid regex.
    pub fn from_config(config: &Config) -> Result<Self> {
        let validator = &config.validator;

        let mut no_examples = Vec::with_capacity(validator.no_examples_patterns.len());
        for pattern in &validator.no_examples_patterns {
            let glob = Glob::new(pattern).map_err(|e| RepoGuardError::InvalidGlob {
                pattern: pattern.clone(),
                source: e,
            })?;
            no_examples.push(glob.compile_matcher());
        }

        let allowed_root_files = DEFAULT_ROOT_SOURCE_FILES
            .iter()
            .map(ToString::to_string)
            .chain(validator.allowed_root_files.iter().cloned())
            .collect();

        let mut path_patterns: Vec<String> = BUILTIN_PACKAGE_PATH_PATTERNS
            .iter()
            .map(ToString::to_string)
            .collect();
        for pattern in &validator.allowed_package_paths {
            // Validate individually so the error names the offending pattern.
            Regex::new(pattern).map_err(|e| RepoGuardError::InvalidPattern {
                pattern: pattern.clone(),
                source: e,
            })?;
            path_patterns.push(pattern.clone());
        }
        let package_paths =
            RegexSet::new(&path_patterns).map_err(|e| RepoGuardError::InvalidPattern {
                pattern: path_patterns.join(" | "),
                source: e,
            })?;

        let package_manifest = compile_builtin(r"^packages/[^/]+/package\.json$")?;
        let fixture_subtree = compile_builtin(r"^packages/[^/]+/test/fixtures/")?;

        Ok(Self {
            allowed_scripts_packages: validator
                .allowed_scripts_packages
                .iter()
                .cloned()
                .collect(),
            no_examples,
            allowed_root_files,
            package_paths,
            package_manifest,
            fixture_subtree,
        })
    }

    /// True when the examples rule has any patterns to apply.
    #[must_use]
    pub fn has_examples_patterns(&self) -> bool {
        !self.no_examples.is_empty()
    }

    /// True when `name` matches a configured no-examples pattern.
    #[must_use]
    pub fn package_name_forbids_examples(&self, name: &str) -> bool {
        self.no_examples.iter().any(|m| m.is_match(name))
    }

    /// True when `package` may carry a `scripts/` subdirectory.
    #[must_use]
    pub fn scripts_allowed_for(&self, package: &str) -> bool {
        self.allowed_scripts_packages.contains(package)
    }

    /// True when a root-level source file named `name` is exempt.
    #[must_use]
    pub fn is_allowed_root_file(&self, name: &str) -> bool {
        self.allowed_root_files.contains(name)
    }

    /// True when the relative path matches any approved source location.
    #[must_use]
    pub fn is_allowed_source_path(&self, rel: &str) -> bool {
        self.package_paths.is_match(rel)
    }

    /// True when a manifest at this relative path is legitimately placed.
    #[must_use]
    pub fn is_valid_manifest_location(&self, rel: &str) -> bool {
        rel == MANIFEST_FILE_NAME
            || self.package_manifest.is_match(rel)
            || self.fixture_subtree.is_match(rel)
    }
}

fn compile_builtin(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| RepoGuardError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}

#[cfg(test)]
#[path = "compiled_tests.rs"]
mod tests;
