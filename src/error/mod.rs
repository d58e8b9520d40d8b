//! Error types and handling infrastructure for tree rewriting

use std::path::{Path, PathBuf};

use crate::rewrite::stats::RewriteStatistics;

/// Core error types for the rewrite process
#[derive(Debug, thiserror::Error)]
pub enum RewriteErrorKind {
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<PathBuf>,
    },

    #[error("File too large: {size} bytes (limit: {limit} bytes)")]
    FileTooLarge {
        size: u64,
        limit: u64,
        path: PathBuf,
    },

    #[error("Invalid configuration: {message}")]
    Configuration { message: String },

    #[error("{failed} file(s) could not be rewritten")]
    PartialFailure {
        failed: usize,
        stats: Box<RewriteStatistics>,
    },
}

impl RewriteErrorKind {
    pub fn io(message: String, path: Option<PathBuf>) -> Self {
        Self::Io { message, path }
    }

    pub fn configuration(message: String) -> Self {
        Self::Configuration { message }
    }

    /// Path the error refers to, when there is one
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Io { path, .. } => path.as_deref(),
            Self::FileTooLarge { path, .. } => Some(path),
            Self::Configuration { .. } | Self::PartialFailure { .. } => None,
        }
    }
}

/// Main error type for rewrite operations
#[derive(Debug, thiserror::Error)]
pub enum RewriteError {
    #[error("{kind}")]
    Rewrite {
        kind: RewriteErrorKind,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error(transparent)]
    Walk(#[from] walkdir::Error),
}

impl RewriteError {
    pub fn rewrite(kind: RewriteErrorKind) -> Self {
        Self::Rewrite { kind, source: None }
    }

    /// Wrap an I/O failure on `path`, keeping the original error as the source
    pub fn io(path: &Path, action: &str, source: std::io::Error) -> Self {
        Self::Rewrite {
            kind: RewriteErrorKind::io(
                format!("failed to {} {}", action, path.display()),
                Some(path.to_path_buf()),
            ),
            source: Some(source),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::rewrite(RewriteErrorKind::configuration(message.into()))
    }

    /// Run that finished with failed files; the statistics are kept for reporting
    pub fn partial_failure(stats: RewriteStatistics) -> Self {
        Self::rewrite(RewriteErrorKind::PartialFailure {
            failed: stats.files_failed,
            stats: Box::new(stats),
        })
    }

    /// Statistics of a completed run that still failed, if any
    pub fn statistics(&self) -> Option<&RewriteStatistics> {
        match self.kind() {
            Some(RewriteErrorKind::PartialFailure { stats, .. }) => Some(&**stats),
            _ => None,
        }
    }

    pub fn kind(&self) -> Option<&RewriteErrorKind> {
        match self {
            Self::Rewrite { kind, .. } => Some(kind),
            Self::Walk(_) => None,
        }
    }

    /// Path the error refers to, when there is one
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Rewrite { kind, .. } => kind.path(),
            Self::Walk(err) => err.path(),
        }
    }

    /// Create a user-friendly error message
    pub fn user_message(&self) -> String {
        match self {
            Self::Rewrite { kind, source } => match (kind, source) {
                (RewriteErrorKind::FileTooLarge { size, limit, path }, _) => format!(
                    "File too large: {} ({} bytes, limit: {} bytes)",
                    path.display(),
                    size,
                    limit
                ),
                (RewriteErrorKind::PartialFailure { failed, .. }, _) => {
                    format!("Run finished with {} failed file(s)", failed)
                }
                (kind, Some(source)) => format!("{}: {}", kind, source),
                (kind, None) => kind.to_string(),
            },
            Self::Walk(err) => format!("Traversal error: {}", err),
        }
    }
}

/// Result type for rewrite operations
pub type RewriteResult<T> = Result<T, RewriteError>;
