mod walker;

pub use walker::TreeWalker;

use std::fs;
use std::path::{Path, PathBuf};

/// An immediate subdirectory of some parent, with its plain name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdir {
    pub path: PathBuf,
    pub name: String,
}

/// List the immediate subdirectories of `dir`, sorted by name.
///
/// A missing or unreadable directory yields an empty list, matching the
/// walker's treatment of optional directories.
#[must_use]
pub fn immediate_subdirs(dir: &Path) -> Vec<Subdir> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut subdirs: Vec<Subdir> = entries
        .filter_map(std::result::Result::ok)
        .filter(|e| e.file_type().is_ok_and(|ft| ft.is_dir()))
        .filter_map(|e| {
            let name = e.file_name().to_str()?.to_string();
            Some(Subdir {
                path: e.path(),
                name,
            })
        })
        .collect();

    subdirs.sort_by(|a, b| a.name.cmp(&b.name));
    subdirs
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
