use std::path::Path;

use crate::error::{RewriteError, RewriteErrorKind};
use crate::rewrite::config::RewriteConfig;
use crate::rewrite::RewriteResult;

/// Check a matched file's size before its content is loaded into memory.
/// Without a configured limit every size is accepted.
pub fn check_file_size(path: &Path, size: u64, config: &RewriteConfig) -> RewriteResult<()> {
    match config.max_file_size {
        Some(limit) if size > limit => Err(RewriteError::rewrite(
            RewriteErrorKind::FileTooLarge {
                size,
                limit,
                path: path.to_path_buf(),
            },
        )),
        _ => Ok(()),
    }
}
