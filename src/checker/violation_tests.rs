use super::*;

#[test]
fn kind_names_match_the_taxonomy() {
    assert_eq!(ViolationKind::ForbiddenDirectory.as_str(), "forbidden-directory");
    assert_eq!(ViolationKind::LargeFile.as_str(), "large-file");
    assert_eq!(
        ViolationKind::StructuralViolation.to_string(),
        "structural-violation"
    );
}

#[test]
fn constructors_set_severity() {
    let forbidden = Violation::forbidden("a/b".to_string(), "m".to_string());
    assert!(forbidden.is_error());

    let structural = Violation::structural("a/b".to_string(), "m".to_string());
    assert!(structural.is_error());

    let large = Violation::large_file("a/b".to_string(), "m".to_string());
    assert!(large.is_warning());
    assert!(!large.is_error());
}
