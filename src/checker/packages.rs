//! Per-package directory restrictions: `examples/` and `scripts/`.

use crate::scanner::immediate_subdirs;

use super::{RuleContext, Violation, PACKAGES_DIR};

/// Packages whose name matches a configured pattern must not contain an
/// `examples/` subdirectory. With no patterns configured the rule is a
/// no-op.
pub(super) fn check_examples(ctx: &RuleContext) -> Vec<Violation> {
    if !ctx.rules.has_examples_patterns() {
        return Vec::new();
    }

    let mut violations = Vec::new();
    for pkg in immediate_subdirs(&ctx.root.join(PACKAGES_DIR)) {
        if !ctx.rules.package_name_forbids_examples(&pkg.name) {
            continue;
        }
        if pkg.path.join("examples").is_dir() {
            violations.push(Violation::forbidden(
                format!("{PACKAGES_DIR}/{}/examples", pkg.name),
                format!("Package \"{}\" must not contain an examples directory", pkg.name),
            ));
        }
    }
    violations
}

/// Packages outside the configured allow-set must not contain a
/// `scripts/` subdirectory.
pub(super) fn check_scripts(ctx: &RuleContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    for pkg in immediate_subdirs(&ctx.root.join(PACKAGES_DIR)) {
        if ctx.rules.scripts_allowed_for(&pkg.name) {
            continue;
        }
        if pkg.path.join("scripts").is_dir() {
            violations.push(Violation::forbidden(
                format!("{PACKAGES_DIR}/{}/scripts", pkg.name),
                format!(
                    "Package \"{}\" is not permitted to contain a scripts directory",
                    pkg.name
                ),
            ));
        }
    }
    violations
}

#[cfg(test)]
#[path = "packages_tests.rs"]
mod tests;
