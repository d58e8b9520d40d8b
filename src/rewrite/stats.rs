//! Statistics tracking for rewrite runs

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::rewrite::engine::RewriteOutcome;

/// Aggregate statistics for one run over a directory tree
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RewriteStatistics {
    /// Matched files that were processed
    pub files_processed: usize,
    /// Processed files whose content changed
    pub files_changed: usize,
    /// Files that failed (only non-zero with continue-on-error)
    pub files_failed: usize,
    /// Total number of substitutions made
    pub replacements: usize,
    /// Bytes read from matched files
    pub bytes_read: u64,
    /// Bytes written back to matched files
    pub bytes_written: u64,
    /// Wall-clock time of the run in milliseconds
    pub elapsed_ms: u64,
    /// Whether the run was a dry run
    pub dry_run: bool,
    /// Timestamp of when statistics were collected
    pub collected_at: chrono::DateTime<chrono::Utc>,
}

impl Default for RewriteStatistics {
    fn default() -> Self {
        Self {
            files_processed: 0,
            files_changed: 0,
            files_failed: 0,
            replacements: 0,
            bytes_read: 0,
            bytes_written: 0,
            elapsed_ms: 0,
            dry_run: false,
            collected_at: chrono::Utc::now(),
        }
    }
}

impl RewriteStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Account for one processed file
    pub fn record(&mut self, outcome: &RewriteOutcome) {
        self.files_processed += 1;
        if outcome.changed {
            self.files_changed += 1;
        }
        self.replacements += outcome.replacements;
        self.bytes_read += outcome.bytes_before;
        if outcome.written {
            self.bytes_written += outcome.bytes_after;
        }
    }

    pub fn record_failure(&mut self) {
        self.files_failed += 1;
    }

    /// Stamp the run duration and collection time
    pub fn finish(&mut self, elapsed: Duration) {
        self.elapsed_ms = elapsed.as_millis() as u64;
        self.collected_at = chrono::Utc::now();
    }

    pub fn has_failures(&self) -> bool {
        self.files_failed > 0
    }

    /// Human-readable multi-line summary
    pub fn summary(&self) -> String {
        let mut lines = vec![
            "Rewrite Statistics:".to_string(),
            format!("Files processed: {}", self.files_processed),
            format!("Files changed: {}", self.files_changed),
            format!("Replacements: {}", self.replacements),
        ];
        if self.files_failed > 0 {
            lines.push(format!("Files failed: {}", self.files_failed));
        }
        lines.push(format!("Bytes read: {}", self.bytes_read));
        if self.dry_run {
            lines.push("Bytes written: 0 (dry run)".to_string());
        } else {
            lines.push(format!("Bytes written: {}", self.bytes_written));
        }
        lines.push(format!("Processing time: {}ms", self.elapsed_ms));
        lines.join("\n")
    }
}
