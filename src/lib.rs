//! strmfix
//!
//! A Rust CLI tool that walks a directory tree and rewrites a literal
//! substring inside every file with a given suffix (`.strm` by default),
//! in place.

pub mod cli;
pub mod error;
pub mod rewrite;
pub mod walker;

// Re-export commonly used types
pub use error::{RewriteError, RewriteErrorKind, RewriteResult};
pub use rewrite::{
    replace_literal, rewrite_content, rewrite_tree, RewriteConfig, RewriteOutcome,
    RewriteStatistics,
};
pub use walker::{matches_suffix, traverse};

/// Rewrite the configured tree, printing progress lines to standard output
pub fn run(config: &RewriteConfig) -> RewriteResult<RewriteStatistics> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    rewrite_tree(config, &mut handle)
}
