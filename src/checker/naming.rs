//! Test-file naming-convention rule.

use crate::scanner::TreeWalker;

use super::{file_name, RuleContext, Violation, WALK_SKIP_DIRS};

const LEGACY_SUFFIXES: &[&str] = &[".spec.ts", ".spec.tsx"];
const INTEGRATION_SUFFIXES: &[&str] = &[".integration.test.ts", ".integration.test.tsx"];
const SYSTEM_SUFFIXES: &[&str] = &[".system.test.ts", ".system.test.tsx"];
const UNIT_SUFFIXES: &[&str] = &[".test.ts", ".test.tsx"];

const INTEGRATION_SEGMENT: &str = "test/integration/";
const SYSTEM_SEGMENT: &str = "test/system/";

fn ends_with_any(name: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|s| name.ends_with(s))
}

/// Test files must carry the suffix matching their directory:
/// `.integration.test` under `test/integration/`, `.system.test` under
/// `test/system/`, plain `.test` anywhere else. The legacy `.spec`
/// suffix is always rejected. Checks are independent; a single file can
/// trigger more than one.
pub(super) fn check(ctx: &RuleContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    let walker = TreeWalker::new(WALK_SKIP_DIRS.iter().copied());

    walker.walk(
        ctx.root,
        "",
        |_, _| {},
        |_, rel| {
            let name = file_name(rel);

            if ends_with_any(name, LEGACY_SUFFIXES) {
                violations.push(Violation::structural(
                    rel.to_string(),
                    "Legacy .spec test suffix is not allowed; rename to .test".to_string(),
                ));
            }

            let is_integration = ends_with_any(name, INTEGRATION_SUFFIXES);
            let is_system = ends_with_any(name, SYSTEM_SUFFIXES);

            if is_integration && !rel.contains(INTEGRATION_SEGMENT) {
                violations.push(Violation::structural(
                    rel.to_string(),
                    ".integration.test files must live under test/integration/".to_string(),
                ));
            }

            if is_system && !rel.contains(SYSTEM_SEGMENT) {
                violations.push(Violation::structural(
                    rel.to_string(),
                    ".system.test files must live under test/system/".to_string(),
                ));
            }

            if ends_with_any(name, UNIT_SUFFIXES)
                && !is_integration
                && !is_system
                && (rel.contains(INTEGRATION_SEGMENT) || rel.contains(SYSTEM_SEGMENT))
            {
                violations.push(Violation::structural(
                    rel.to_string(),
                    "Plain .test files may not live under test/integration/ or test/system/; \
                     use the suffix matching the directory"
                        .to_string(),
                ));
            }
        },
    );

    violations
}

#[cfg(test)]
#[path = "naming_tests.rs"]
mod tests;
