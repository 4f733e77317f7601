//! Source-file location rule.

use crate::scanner::TreeWalker;

use super::{file_name, RuleContext, Violation, SOURCE_EXTENSIONS, WALK_SKIP_DIRS};

fn has_source_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| SOURCE_EXTENSIONS.contains(&ext))
}

/// Every source file must sit in an approved location: a root-level
/// allow-listed filename, a built-in per-package location
/// (`src/`, `test/`, `examples/`, `generated/`, `scripts/`, or a
/// package-level config file), or a configured extra path pattern.
pub(super) fn check(ctx: &RuleContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    let walker = TreeWalker::new(WALK_SKIP_DIRS.iter().copied());

    walker.walk(
        ctx.root,
        "",
        |_, _| {},
        |_, rel| {
            let name = file_name(rel);
            if !has_source_extension(name) {
                return;
            }

            if !rel.contains('/') {
                if !ctx.rules.is_allowed_root_file(name) {
                    violations.push(Violation::structural(
                        rel.to_string(),
                        format!("Root-level source file {name} is not in the allow-list"),
                    ));
                }
                return;
            }

            if !ctx.rules.is_allowed_source_path(rel) {
                violations.push(Violation::structural(
                    rel.to_string(),
                    "Source file outside an approved package location (src/, test/, examples/, \
                     generated/, scripts/, or a package config file)"
                        .to_string(),
                ));
            }
        },
    );

    violations
}

#[cfg(test)]
#[path = "sources_tests.rs"]
mod tests;
