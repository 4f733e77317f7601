//! Nested package-manifest rule.

use crate::scanner::TreeWalker;

use super::{file_name, RuleContext, Violation, MANIFEST_FILE_NAME, WALK_SKIP_DIRS};

/// A `package.json` may only exist at the repository root, directly
/// inside a workspace package, or anywhere under a package's
/// `test/fixtures/` subtree.
pub(super) fn check(ctx: &RuleContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    let walker = TreeWalker::new(WALK_SKIP_DIRS.iter().copied());

    walker.walk(
        ctx.root,
        "",
        |_, _| {},
        |_, rel| {
            if file_name(rel) != MANIFEST_FILE_NAME {
                return;
            }
            if ctx.rules.is_valid_manifest_location(rel) {
                return;
            }
            violations.push(Violation::forbidden(
                rel.to_string(),
                format!(
                    "Nested {MANIFEST_FILE_NAME} is not allowed here; workspace packages live \
                     directly under packages/ and test data under test/fixtures/"
                ),
            ));
        },
    );

    violations
}

#[cfg(test)]
#[path = "manifests_tests.rs"]
mod tests;
