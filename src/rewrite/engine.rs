//! Core rewrite engine: literal substitution and in-place file rewriting

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use crate::error::RewriteError;
use crate::rewrite::config::RewriteConfig;
use crate::rewrite::limits;
use crate::rewrite::RewriteResult;

/// Summary of one processed file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    pub path: PathBuf,
    /// Number of non-overlapping occurrences of the search text that were replaced
    pub replacements: usize,
    pub bytes_before: u64,
    pub bytes_after: u64,
    /// Whether the new content differs from the old
    pub changed: bool,
    /// Whether the file was actually written
    pub written: bool,
}

/// Replace every non-overlapping occurrence of `search` with `replace`,
/// scanning left to right. Inserted text is never re-scanned.
///
/// Returns the new content and the number of replacements made.
pub fn replace_literal(content: &str, search: &str, replace: &str) -> (String, usize) {
    if search.is_empty() {
        return (content.to_string(), 0);
    }

    let count = content.matches(search).count();
    if count == 0 {
        return (content.to_string(), 0);
    }

    (content.replace(search, replace), count)
}

/// Keep only the first line of `content`, including its line terminator
pub fn keep_first_line(content: &str) -> &str {
    match content.find('\n') {
        Some(end) => &content[..=end],
        None => content,
    }
}

/// Apply the configured transformation to a file's text
pub fn transform(content: &str, config: &RewriteConfig) -> (String, usize) {
    let (mut rewritten, replacements) = replace_literal(content, &config.search, &config.replace);
    if config.first_line_only {
        let first_len = keep_first_line(&rewritten).len();
        rewritten.truncate(first_len);
    }
    (rewritten, replacements)
}

/// Rewrite one file in place.
///
/// The file is opened for reading and writing (no lock is taken), read fully
/// as text, transformed, then overwritten from the start and truncated to the
/// new length. In dry-run mode it is opened read-only and left untouched.
/// The handle is closed when this returns, on success or failure.
pub fn rewrite_content(path: &Path, config: &RewriteConfig) -> RewriteResult<RewriteOutcome> {
    let mut file = open_for_rewrite(path, config.dry_run)?;

    let size = file
        .metadata()
        .map_err(|e| RewriteError::io(path, "stat", e))?
        .len();
    limits::check_file_size(path, size, config)?;

    let mut content = String::with_capacity(size as usize);
    file.read_to_string(&mut content)
        .map_err(|e| RewriteError::io(path, "read", e))?;

    let (rewritten, replacements) = transform(&content, config);
    let changed = rewritten != content;

    if !config.dry_run {
        overwrite(&mut file, rewritten.as_bytes()).map_err(|e| RewriteError::io(path, "write", e))?;
    }

    Ok(RewriteOutcome {
        path: path.to_path_buf(),
        replacements,
        bytes_before: content.len() as u64,
        bytes_after: rewritten.len() as u64,
        changed,
        written: !config.dry_run,
    })
}

fn open_for_rewrite(path: &Path, read_only: bool) -> RewriteResult<File> {
    OpenOptions::new()
        .read(true)
        .write(!read_only)
        .open(path)
        .map_err(|e| RewriteError::io(path, "open", e))
}

fn overwrite(file: &mut File, bytes: &[u8]) -> std::io::Result<()> {
    file.seek(SeekFrom::Start(0))?;
    file.write_all(bytes)?;
    file.set_len(bytes.len() as u64)?;
    file.flush()
}
