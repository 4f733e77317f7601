//! Test-fixture rules: committed staging directories and oversized files.

use std::fs;
use std::path::Path;

use crate::scanner::{immediate_subdirs, Subdir, TreeWalker};

use super::{
    file_name, RuleContext, Violation, COMPRESSED_FIXTURE_SUFFIXES, FIXTURE_SIZE_LIMIT_KB,
    PACKAGES_DIR, STAGING_DIR_NAME, WALK_SKIP_DIRS,
};

fn fixtures_dir(pkg: &Subdir) -> (std::path::PathBuf, String) {
    let dir = pkg.path.join("test").join("fixtures");
    let prefix = format!("{PACKAGES_DIR}/{}/test/fixtures", pkg.name);
    (dir, prefix)
}

fn is_compressed(name: &str) -> bool {
    COMPRESSED_FIXTURE_SUFFIXES.iter().any(|s| name.ends_with(s))
}

/// No directory literally named `staging` anywhere under a package's
/// `test/fixtures/`.
pub(super) fn check_staging(ctx: &RuleContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    let walker = TreeWalker::new(WALK_SKIP_DIRS.iter().copied());

    for pkg in immediate_subdirs(&ctx.root.join(PACKAGES_DIR)) {
        let (dir, prefix) = fixtures_dir(&pkg);
        walker.walk(
            &dir,
            &prefix,
            |_, rel| {
                if file_name(rel) == STAGING_DIR_NAME {
                    violations.push(Violation::forbidden(
                        rel.to_string(),
                        "Staging directories must not be committed; clean up after generating \
                         fixtures"
                            .to_string(),
                    ));
                }
            },
            |_, _| {},
        );
    }

    violations
}

/// Fixtures over the uncompressed size budget are reported as warnings;
/// compressed-format files are exempt. The budget is strictly greater
/// than, so a fixture of exactly the limit passes.
pub(super) fn check_sizes(ctx: &RuleContext) -> Vec<Violation> {
    let mut violations = Vec::new();
    let walker = TreeWalker::new(WALK_SKIP_DIRS.iter().copied());

    for pkg in immediate_subdirs(&ctx.root.join(PACKAGES_DIR)) {
        let (dir, prefix) = fixtures_dir(&pkg);
        walker.walk(
            &dir,
            &prefix,
            |_, _| {},
            |path, rel| {
                if let Some(violation) = check_file_size(path, rel) {
                    violations.push(violation);
                }
            },
        );
    }

    violations
}

#[allow(clippy::cast_precision_loss)] // Fixture sizes are far below 2^52 bytes
fn check_file_size(path: &Path, rel: &str) -> Option<Violation> {
    let metadata = fs::metadata(path).ok()?;
    let kb = metadata.len() as f64 / 1024.0;
    if kb <= FIXTURE_SIZE_LIMIT_KB || is_compressed(file_name(rel)) {
        return None;
    }
    Some(Violation::large_file(
        rel.to_string(),
        format!(
            "Fixture is {kb:.0} KB (limit {FIXTURE_SIZE_LIMIT_KB:.0} KB uncompressed); \
             compress it or trim it"
        ),
    ))
}

#[cfg(test)]
#[path = "fixtures_tests.rs"]
mod tests;
