mod compiled;
mod fixtures;
mod manifests;
mod naming;
mod packages;
mod shell;
mod sources;
#[cfg(test)]
pub(crate) mod test_support;
mod violation;

pub use compiled::{
    CompiledRules, COMPRESSED_FIXTURE_SUFFIXES, DEFAULT_ROOT_SOURCE_FILES, FIXTURE_SIZE_LIMIT_KB,
    HOOK_DIRS, MANIFEST_FILE_NAME, PACKAGES_DIR, SHELL_EXTENSIONS, SOURCE_EXTENSIONS,
    STAGING_DIR_NAME, WALK_SKIP_DIRS,
};
pub use violation::{Severity, Violation, ViolationKind};

use std::path::Path;

/// Everything a rule check needs: the scan root and the compiled tables.
/// Rules never load configuration themselves.
pub(crate) struct RuleContext<'a> {
    pub root: &'a Path,
    pub rules: &'a CompiledRules,
}

/// Runs every structure rule against a repository tree.
///
/// Rules are evaluated sequentially; each returns its own violation list
/// and the results are merged in rule order, so evaluation order affects
/// report order but never report content. Rule checks only read the
/// filesystem.
pub struct StructureValidator<'a> {
    root: &'a Path,
    rules: &'a CompiledRules,
}

impl<'a> StructureValidator<'a> {
    #[must_use]
    pub const fn new(root: &'a Path, rules: &'a CompiledRules) -> Self {
        Self { root, rules }
    }

    /// Evaluate all rules and return the merged violation list.
    #[must_use]
    pub fn validate(&self) -> Vec<Violation> {
        let ctx = RuleContext {
            root: self.root,
            rules: self.rules,
        };

        let mut violations = Vec::new();
        violations.extend(manifests::check(&ctx));
        violations.extend(sources::check(&ctx));
        violations.extend(naming::check(&ctx));
        violations.extend(packages::check_examples(&ctx));
        violations.extend(packages::check_scripts(&ctx));
        violations.extend(shell::check(&ctx));
        violations.extend(fixtures::check_staging(&ctx));
        violations.extend(fixtures::check_sizes(&ctx));
        violations
    }
}

/// Last path component of a forward-slash relative path.
pub(crate) fn file_name(rel: &str) -> &str {
    rel.rsplit('/').next().unwrap_or(rel)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
