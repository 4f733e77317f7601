use super::*;
use std::path::PathBuf;

#[test]
fn normalize_separators_converts_backslashes() {
    assert_eq!(normalize_separators("src\\lib.ts"), "src/lib.ts");
    assert_eq!(normalize_separators("src/lib.ts"), "src/lib.ts");
}

#[test]
fn display_path_relative_to_root() {
    let root = PathBuf::from("/home/user/project");
    let file = PathBuf::from("/home/user/project/packages/foo/src/index.ts");

    assert_eq!(display_path(&file, &root), "packages/foo/src/index.ts");
}

#[test]
fn display_path_outside_root_is_returned_as_is() {
    let root = PathBuf::from("/home/user/project");
    let file = PathBuf::from("/home/other/file.ts");

    assert!(display_path(&file, &root).contains("other/file.ts"));
}

#[test]
fn display_path_of_root_itself_is_dot() {
    let root = PathBuf::from("/home/user/project");

    assert_eq!(display_path(&root, &root), ".");
}

#[test]
fn join_rel_handles_empty_parts() {
    assert_eq!(join_rel("", "a/b"), "a/b");
    assert_eq!(join_rel("prefix", ""), "prefix");
    assert_eq!(join_rel("prefix", "a/b"), "prefix/a/b");
}
