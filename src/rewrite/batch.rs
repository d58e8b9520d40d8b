use std::io::Write;
use std::time::Instant;

use crate::cli::CliUtils;
use crate::error::{RewriteError, RewriteErrorKind};
use crate::rewrite::engine::rewrite_content;
use crate::rewrite::stats::RewriteStatistics;
use crate::rewrite::{RewriteConfig, RewriteResult};
use crate::walker::matching_files;

/// Label printed before the path of every processed file
pub const PROCESSED_LABEL: &str = "Processed file:";
/// Label used instead of [`PROCESSED_LABEL`] in dry-run mode
pub const DRY_RUN_LABEL: &str = "Would rewrite file:";

/// Walk `config.root` and rewrite every file whose name ends with
/// `config.suffix`, one at a time, writing a progress line to `progress`
/// after each file.
///
/// The first traversal or file error aborts the run unless
/// `continue_on_error` is set; then failures are reported on stderr and the
/// run ends with a `PartialFailure` error, carrying the run's statistics,
/// once the tree is exhausted.
pub fn rewrite_tree<W: Write>(
    config: &RewriteConfig,
    progress: &mut W,
) -> RewriteResult<RewriteStatistics> {
    config.validate()?;

    let started = Instant::now();
    let label = if config.dry_run {
        DRY_RUN_LABEL
    } else {
        PROCESSED_LABEL
    };
    let mut stats = RewriteStatistics::new();
    stats.dry_run = config.dry_run;

    for item in matching_files(&config.root, &config.suffix) {
        let result = item.and_then(|path| rewrite_content(&path, config));

        match result {
            Ok(outcome) => {
                writeln!(progress, "{} {}", label, outcome.path.display())
                    .map_err(progress_error)?;
                stats.record(&outcome);
            }
            Err(e) if config.continue_on_error => {
                CliUtils::show_error(&e.user_message());
                stats.record_failure();
            }
            Err(e) => return Err(e),
        }
    }

    stats.finish(started.elapsed());

    if stats.has_failures() {
        return Err(RewriteError::partial_failure(stats));
    }

    Ok(stats)
}

fn progress_error(source: std::io::Error) -> RewriteError {
    RewriteError::Rewrite {
        kind: RewriteErrorKind::io("failed to write progress output".to_string(), None),
        source: Some(source),
    }
}
