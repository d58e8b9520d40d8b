//! Directory traversal and file selection

pub mod filter;

use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

use crate::error::{RewriteError, RewriteResult};

pub use filter::matches_suffix;

/// Lazily enumerate every file under `root`, nested directories included.
///
/// The sequence is a single pass over the tree as it exists while it is walked.
/// Symlinks to directories are not descended into, so each file is yielded at
/// most once. Every other symlink is yielded, including one whose target is
/// gone, so opening it later fails instead of the file going unnoticed.
/// Entries that cannot be read come through as `Err` items and the caller
/// decides whether to stop.
pub fn traverse(root: impl AsRef<Path>) -> impl Iterator<Item = RewriteResult<PathBuf>> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) if is_file_entry(&entry) => Some(Ok(entry.into_path())),
            Ok(_) => None,
            Err(err) => Some(Err(RewriteError::from(err))),
        })
}

/// Files under `root` whose name ends with `suffix`; traversal errors pass through
pub fn matching_files(
    root: impl AsRef<Path>,
    suffix: &str,
) -> impl Iterator<Item = RewriteResult<PathBuf>> {
    let suffix = suffix.to_owned();
    traverse(root).filter(move |item| match item {
        Ok(path) => matches_suffix(path, &suffix),
        Err(_) => true,
    })
}

fn is_file_entry(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    !file_type.is_dir()
}
