//! Shell-script rule.

use crate::scanner::TreeWalker;

use super::{file_name, RuleContext, Violation, HOOK_DIRS, SHELL_EXTENSIONS, WALK_SKIP_DIRS};

fn has_shell_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| SHELL_EXTENSIONS.iter().any(|s| ext.eq_ignore_ascii_case(s)))
}

/// No shell, batch, or PowerShell files anywhere in the tree; scripts
/// must be cross-platform. Hook directories are pruned in addition to
/// the usual build/VCS skip-set.
pub(super) fn check(ctx: &RuleContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    let walker = TreeWalker::new(WALK_SKIP_DIRS.iter().chain(HOOK_DIRS).copied());

    walker.walk(
        ctx.root,
        "",
        |_, _| {},
        |_, rel| {
            if has_shell_extension(file_name(rel)) {
                violations.push(Violation::forbidden(
                    rel.to_string(),
                    "Shell scripts are not allowed; use a cross-platform script runner"
                        .to_string(),
                ));
            }
        },
    );

    violations
}

#[cfg(test)]
#[path = "shell_tests.rs"]
mod tests;
