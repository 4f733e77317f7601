use super::*;
use crate::checker::test_support::{default_rules, TempTree};
use crate::checker::ViolationKind;

fn run(tree: &TempTree) -> Vec<Violation> {
    let rules = default_rules();
    let ctx = RuleContext {
        root: tree.path(),
        rules: &rules,
    };
    check(&ctx)
}

#[test]
fn shell_family_extensions_are_flagged() {
    let tree = TempTree::new();
    tree.file("tools/build.sh")
        .file("deploy.bat")
        .file("setup.ps1");

    let violations = run(&tree);
    assert_eq!(violations.len(), 3);
    assert!(violations
        .iter()
        .all(|v| v.kind == ViolationKind::ForbiddenDirectory && v.is_error()));
}

#[test]
fn extension_match_is_case_insensitive() {
    let tree = TempTree::new();
    tree.file("Deploy.PS1");

    assert_eq!(run(&tree).len(), 1);
}

#[test]
fn hook_directories_are_pruned() {
    let tree = TempTree::new();
    tree.file(".husky/pre-commit.sh")
        .file("node_modules/dep/install.sh");

    assert!(run(&tree).is_empty());
}

#[test]
fn non_shell_files_pass() {
    let tree = TempTree::new();
    tree.file("packages/foo/src/index.ts").file("README.md");

    assert!(run(&tree).is_empty());
}
