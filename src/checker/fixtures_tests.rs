use super::*;
use crate::checker::test_support::{default_rules, TempTree};
use crate::checker::{Severity, ViolationKind};

fn run(tree: &TempTree, f: fn(&RuleContext) -> Vec<Violation>) -> Vec<Violation> {
    let rules = default_rules();
    let ctx = RuleContext {
        root: tree.path(),
        rules: &rules,
    };
    f(&ctx)
}

#[test]
fn staging_dir_under_fixtures_is_flagged() {
    let tree = TempTree::new();
    tree.dir("packages/foo/test/fixtures/staging");

    let violations = run(&tree, check_staging);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::ForbiddenDirectory);
    assert_eq!(violations[0].path, "packages/foo/test/fixtures/staging");
}

#[test]
fn nested_staging_dir_is_flagged() {
    let tree = TempTree::new();
    tree.dir("packages/foo/test/fixtures/project-a/staging");

    let violations = run(&tree, check_staging);
    assert_eq!(violations.len(), 1);
    assert_eq!(
        violations[0].path,
        "packages/foo/test/fixtures/project-a/staging"
    );
}

#[test]
fn staging_outside_fixtures_is_ignored() {
    let tree = TempTree::new();
    tree.dir("packages/foo/staging").dir("packages/foo/test/staging");

    assert!(run(&tree, check_staging).is_empty());
}

#[test]
fn package_without_fixtures_is_skipped() {
    let tree = TempTree::new();
    tree.dir("packages/foo/src");

    assert!(run(&tree, check_staging).is_empty());
}

#[test]
fn fixture_at_exactly_the_limit_passes() {
    let tree = TempTree::new();
    tree.file_with_size("packages/foo/test/fixtures/exact.json", 100 * 1024);

    assert!(run(&tree, check_sizes).is_empty());
}

#[test]
fn oversized_fixture_is_a_warning() {
    let tree = TempTree::new();
    tree.file_with_size("packages/foo/test/fixtures/big.json", 101 * 1024);

    let violations = run(&tree, check_sizes);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].kind, ViolationKind::LargeFile);
    assert_eq!(violations[0].severity, Severity::Warning);
    assert!(violations[0].message.contains("101 KB"));
}

#[test]
fn compressed_fixtures_are_exempt() {
    let tree = TempTree::new();
    tree.file_with_size("packages/foo/test/fixtures/archive.zip", 200 * 1024)
        .file_with_size("packages/foo/test/fixtures/bundle.tar.gz", 200 * 1024);

    assert!(run(&tree, check_sizes).is_empty());
}

#[test]
fn oversized_files_outside_fixtures_are_ignored() {
    let tree = TempTree::new();
    tree.file_with_size("packages/foo/src/embedded-data.bin", 300 * 1024);

    assert!(run(&tree, check_sizes).is_empty());
}
