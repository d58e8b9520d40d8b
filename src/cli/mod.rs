//! Command-line interface module

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use crate::error::{RewriteError, RewriteErrorKind, RewriteResult};
use crate::rewrite::{RewriteConfig, DEFAULT_SUFFIX};

pub mod config_file;

pub use config_file::{FileConfig, SizeValue};

/// Main CLI arguments
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "strmfix")]
#[command(about = "Rewrite a URL prefix inside every .strm file under a directory")]
#[command(version)]
#[command(long_about = None)]
pub struct Args {
    /// Root directory to scan
    #[arg(env = "STRMFIX_ROOT")]
    pub root: Option<PathBuf>,

    /// Literal text to search for
    #[arg(short, long, env = "STRMFIX_SEARCH", allow_hyphen_values = true)]
    pub search: Option<String>,

    /// Literal text to substitute for every match
    #[arg(short, long, env = "STRMFIX_REPLACE", allow_hyphen_values = true)]
    pub replace: Option<String>,

    /// File-name suffix selecting files to rewrite (default: .strm)
    #[arg(long, env = "STRMFIX_SUFFIX")]
    pub suffix: Option<String>,

    /// Load options from a JSON or YAML (.yaml/.yml) config file
    #[arg(short, long, env = "STRMFIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep only the first line of each rewritten file
    #[arg(long)]
    pub first_line_only: bool,

    /// Report what would change without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Skip reading files larger than this (e.g., 512KB, 10MB)
    #[arg(long)]
    pub max_file_size: Option<String>,

    /// Continue with other files when one file fails
    #[arg(long)]
    pub continue_on_error: bool,

    /// Output run statistics
    #[arg(long)]
    pub stats: bool,

    /// Statistics output format
    #[arg(long, value_enum, default_value_t = StatsFormat::Text)]
    pub stats_format: StatsFormat,

    /// Enable verbose logging
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Output formats for `--stats`
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatsFormat {
    #[default]
    #[value(name = "text")]
    Text,
    #[value(name = "json")]
    Json,
}

/// CLI configuration
#[derive(Debug, Clone)]
pub struct CliConfig {
    pub args: Args,
    pub rewrite_config: RewriteConfig,
}

impl CliConfig {
    /// Create CLI configuration from arguments, merging in the config file if one is given
    pub fn from_args(args: Args) -> RewriteResult<Self> {
        let file = match &args.config {
            Some(path) => FileConfig::load(path)?,
            None => FileConfig::default(),
        };
        let rewrite_config = Self::create_rewrite_config(&args, file)?;

        Ok(Self {
            args,
            rewrite_config,
        })
    }

    /// Create rewrite configuration; command-line and environment values win over the file
    fn create_rewrite_config(args: &Args, file: FileConfig) -> RewriteResult<RewriteConfig> {
        let root = args.root.clone().or(file.root).ok_or_else(|| {
            RewriteError::configuration(
                "No root directory provided. Pass a path, set STRMFIX_ROOT, or use --config",
            )
        })?;
        let search = args.search.clone().or(file.search).ok_or_else(|| {
            RewriteError::configuration("No search text provided. Use --search or STRMFIX_SEARCH")
        })?;
        let replace = args.replace.clone().or(file.replace).ok_or_else(|| {
            RewriteError::configuration(
                "No replacement text provided. Use --replace or STRMFIX_REPLACE",
            )
        })?;

        let max_file_size = match &args.max_file_size {
            Some(text) => Some(parse_size_limit(text)?),
            None => match file.max_file_size {
                Some(SizeValue::Bytes(bytes)) => Some(bytes),
                Some(SizeValue::Text(text)) => Some(parse_size_limit(&text)?),
                None => None,
            },
        };

        let config = RewriteConfig {
            root,
            suffix: args
                .suffix
                .clone()
                .or(file.suffix)
                .unwrap_or_else(|| DEFAULT_SUFFIX.to_string()),
            search,
            replace,
            first_line_only: args.first_line_only || file.first_line_only.unwrap_or(false),
            dry_run: args.dry_run,
            max_file_size,
            continue_on_error: args.continue_on_error || file.continue_on_error.unwrap_or(false),
        };

        config.validate()?;

        Ok(config)
    }

    /// Check if quiet mode is enabled
    pub fn is_quiet(&self) -> bool {
        self.args.quiet
    }

    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.args.verbose
    }

    /// Check if stats output is requested
    pub fn want_stats(&self) -> bool {
        self.args.stats
    }

    pub fn stats_format(&self) -> StatsFormat {
        self.args.stats_format
    }

    /// Describe the effective configuration, one setting per line
    pub fn describe(&self) -> Vec<String> {
        let config = &self.rewrite_config;
        let mut lines = vec![
            format!("root: {}", config.root.display()),
            format!("suffix: {}", config.suffix),
            format!("search: {}", config.search),
            format!("replace: {}", config.replace),
        ];
        if let Some(limit) = config.max_file_size {
            lines.push(format!("max file size: {}", CliUtils::format_file_size(limit)));
        }
        if config.first_line_only {
            lines.push("first line only: yes".to_string());
        }
        if config.dry_run {
            lines.push("dry run: yes".to_string());
        }
        if config.continue_on_error {
            lines.push("continue on error: yes".to_string());
        }
        lines
    }
}

/// Parse size limit string (e.g., "100MB", "1GB", "500KB")
pub fn parse_size_limit(limit: &str) -> RewriteResult<u64> {
    let limit_str = limit.trim().to_uppercase();
    let invalid = || RewriteError::configuration(format!("Invalid size limit: {}", limit));

    let (number, multiplier) = if let Some(size) = limit_str.strip_suffix("GB") {
        (size, 1024.0 * 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("MB") {
        (size, 1024.0 * 1024.0)
    } else if let Some(size) = limit_str.strip_suffix("KB") {
        (size, 1024.0)
    } else if let Some(size) = limit_str.strip_suffix('B') {
        return size.trim().parse::<u64>().map_err(|_| invalid());
    } else {
        // Assume bytes
        return limit_str.parse::<u64>().map_err(|_| invalid());
    };

    let value = number.trim().parse::<f64>().map_err(|_| invalid())?;
    if !value.is_finite() || value < 0.0 {
        return Err(invalid());
    }
    Ok((value * multiplier) as u64)
}

/// CLI utilities and helpers
pub struct CliUtils;

impl CliUtils {
    /// Format a file size in human-readable format
    pub fn format_file_size(bytes: u64) -> String {
        const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
        let mut size = bytes as f64;
        let mut unit_index = 0;

        while size >= 1024.0 && unit_index < UNITS.len() - 1 {
            size /= 1024.0;
            unit_index += 1;
        }

        if unit_index == 0 {
            format!("{} {}", bytes, UNITS[unit_index])
        } else {
            format!("{:.1} {}", size, UNITS[unit_index])
        }
    }

    /// Format a duration in human-readable format
    pub fn format_duration(duration: Duration) -> String {
        let total_millis = duration.as_millis();

        if total_millis < 1000 {
            format!("{}ms", total_millis)
        } else if total_millis < 60_000 {
            format!("{:.1}s", total_millis as f64 / 1000.0)
        } else {
            let minutes = total_millis / 60_000;
            let seconds = (total_millis % 60_000) / 1000;
            format!("{}m {}s", minutes, seconds)
        }
    }

    /// Show an error message
    pub fn show_error(message: &str) {
        eprintln!("{} {}", Self::marker("✗", console::Color::Red), message);
    }

    /// Show a warning message (if not in quiet mode)
    pub fn show_warning(message: &str, quiet: bool) {
        if !quiet {
            eprintln!("{} {}", Self::marker("⚠", console::Color::Yellow), message);
        }
    }

    /// Show a diagnostic message (only in verbose mode)
    pub fn show_info(message: &str, verbose: bool) {
        if verbose {
            eprintln!("{} {}", Self::marker("·", console::Color::Cyan), message);
        }
    }

    /// Check if stderr output should be colored
    pub fn should_use_color() -> bool {
        console::Term::stderr().is_term() && std::env::var_os("NO_COLOR").is_none()
    }

    fn marker(symbol: &str, color: console::Color) -> String {
        if Self::should_use_color() {
            console::style(symbol).fg(color).force_styling(true).to_string()
        } else {
            symbol.to_string()
        }
    }
}

/// Print a tip for common failures. The error itself is reported by the caller.
pub fn print_hint(error: &RewriteError) {
    let tip = match error.kind() {
        Some(RewriteErrorKind::Configuration { .. }) => {
            Some("Try 'strmfix --help' for usage information.")
        }
        Some(RewriteErrorKind::FileTooLarge { .. }) => {
            Some("Use --max-file-size to raise the limit")
        }
        Some(RewriteErrorKind::Io { .. }) | None => {
            Some("Use --continue-on-error to skip files that cannot be rewritten")
        }
        Some(RewriteErrorKind::PartialFailure { .. }) => None,
    };

    if let Some(tip) = tip {
        eprintln!("Tip: {}", tip);
    }
}
