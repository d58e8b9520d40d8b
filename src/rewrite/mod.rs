//! In-place text rewriting module
//!
//! This module contains the rewrite engine, its configuration, size limits,
//! the tree-wide batch driver and run statistics.

pub mod batch;
pub mod config;
pub mod engine;
pub mod limits;
pub mod stats;

pub use batch::rewrite_tree;
pub use config::{RewriteConfig, DEFAULT_SUFFIX};
pub use engine::{replace_literal, rewrite_content, RewriteOutcome};
pub use stats::RewriteStatistics;

/// Result type for rewrite operations
pub type RewriteResult<T> = crate::error::RewriteResult<T>;
