//! Configuration options for tree rewriting

use std::path::PathBuf;

use crate::error::{RewriteError, RewriteResult};

/// Default file-name suffix selecting files to rewrite
pub const DEFAULT_SUFFIX: &str = ".strm";

/// Rewrite configuration options
#[derive(Debug, Clone, PartialEq)]
pub struct RewriteConfig {
    /// Directory tree to scan
    pub root: PathBuf,
    /// Literal, case-sensitive file-name suffix (e.g. `.strm`)
    pub suffix: String,
    /// Literal substring to find
    pub search: String,
    /// Literal substring written in place of every match
    pub replace: String,
    /// Keep only the first line of the rewritten content
    pub first_line_only: bool,
    /// Count replacements without writing anything
    pub dry_run: bool,
    /// Refuse to read matched files larger than this many bytes
    pub max_file_size: Option<u64>,
    /// Report failed files and keep going instead of aborting
    pub continue_on_error: bool,
}

impl Default for RewriteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            suffix: DEFAULT_SUFFIX.to_string(),
            search: String::new(),
            replace: String::new(),
            first_line_only: false,
            dry_run: false,
            max_file_size: None,
            continue_on_error: false,
        }
    }
}

impl RewriteConfig {
    pub fn new(
        root: impl Into<PathBuf>,
        search: impl Into<String>,
        replace: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            search: search.into(),
            replace: replace.into(),
            ..Self::default()
        }
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_first_line_only(mut self, enabled: bool) -> Self {
        self.first_line_only = enabled;
        self
    }

    pub fn with_dry_run(mut self, enabled: bool) -> Self {
        self.dry_run = enabled;
        self
    }

    pub fn with_max_file_size(mut self, limit: Option<u64>) -> Self {
        self.max_file_size = limit;
        self
    }

    pub fn with_continue_on_error(mut self, enabled: bool) -> Self {
        self.continue_on_error = enabled;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> RewriteResult<()> {
        if self.search.is_empty() {
            return Err(RewriteError::configuration("search text must not be empty"));
        }

        if self.suffix.is_empty() {
            return Err(RewriteError::configuration("file suffix must not be empty"));
        }

        if self.max_file_size == Some(0) {
            return Err(RewriteError::configuration(
                "max file size must be greater than zero",
            ));
        }

        // A missing root is reported by the traversal itself
        if let Ok(metadata) = std::fs::metadata(&self.root) {
            if !metadata.is_dir() {
                return Err(RewriteError::configuration(format!(
                    "root {} is not a directory",
                    self.root.display()
                )));
            }
        }

        Ok(())
    }
}
