use std::collections::HashSet;
use std::path::Path;

use walkdir::WalkDir;

use crate::path_utils::{join_rel, normalize_separators};

/// Recursive directory traversal with a skip-set and per-entry callbacks.
///
/// Directories whose name is in the skip-set are neither reported through
/// `on_directory` nor descended into. Traversal visits a directory before
/// anything beneath it; order between siblings is unspecified. A starting
/// directory that does not exist or cannot be read completes with zero
/// visits, so callers can point the walker at optional directories
/// (e.g. a package without `test/fixtures`) without checking first.
pub struct TreeWalker {
    skip_dirs: HashSet<String>,
}

impl TreeWalker {
    #[must_use]
    pub fn new<I, S>(skip_dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skip_dirs: skip_dirs.into_iter().map(Into::into).collect(),
        }
    }

    /// Walk everything under `root`, reporting each entry with a
    /// forward-slash relative path built from `prefix`.
    ///
    /// `on_directory` fires for every non-skipped directory before its
    /// subtree is visited; `on_file` fires for every regular file at any
    /// depth. Both receive the host-convention absolute path and the
    /// display-normalized relative path.
    pub fn walk<D, F>(&self, root: &Path, prefix: &str, mut on_directory: D, mut on_file: F)
    where
        D: FnMut(&Path, &str),
        F: FnMut(&Path, &str),
    {
        let walker = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_entry(|e| !self.is_skipped(e));

        for entry in walker.filter_map(std::result::Result::ok) {
            let Ok(stripped) = entry.path().strip_prefix(root) else {
                continue;
            };
            let rel = join_rel(prefix, &normalize_separators(&stripped.to_string_lossy()));

            let file_type = entry.file_type();
            if file_type.is_dir() {
                on_directory(entry.path(), &rel);
            } else if file_type.is_file() {
                on_file(entry.path(), &rel);
            }
        }
    }

    fn is_skipped(&self, entry: &walkdir::DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.skip_dirs.contains(name))
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
