use clap::Parser;

use anyhow::Result;

use strmfix::cli::{print_hint, Args, CliConfig, CliUtils, StatsFormat};
use strmfix::{rewrite_tree, RewriteError, RewriteStatistics};

fn main() -> Result<()> {
    let args = Args::parse();

    let config = CliConfig::from_args(args).map_err(report)?;
    let verbose = config.is_verbose();
    let quiet = config.is_quiet();

    for line in config.describe() {
        CliUtils::show_info(&line, verbose);
    }
    if config.rewrite_config.dry_run {
        CliUtils::show_warning("Dry run: no files will be modified", quiet);
    }

    let want_stats = config.want_stats() && !quiet;
    let result = if quiet {
        rewrite_tree(&config.rewrite_config, &mut std::io::sink())
    } else {
        strmfix::run(&config.rewrite_config)
    };

    let stats = match result {
        Ok(stats) => stats,
        Err(error) => {
            // A run that kept going past failures still reports what it did
            if let (true, Some(stats)) = (want_stats, error.statistics()) {
                output_statistics(stats, config.stats_format())?;
            }
            return Err(report(error));
        }
    };

    CliUtils::show_info(
        &format!(
            "Done in {}",
            CliUtils::format_duration(std::time::Duration::from_millis(stats.elapsed_ms))
        ),
        verbose,
    );

    if want_stats {
        output_statistics(&stats, config.stats_format())?;
    }

    Ok(())
}

fn report(error: RewriteError) -> anyhow::Error {
    print_hint(&error);
    error.into()
}

fn output_statistics(stats: &RewriteStatistics, format: StatsFormat) -> Result<()> {
    match format {
        StatsFormat::Text => println!("\n{}", stats.summary()),
        StatsFormat::Json => println!("{}", serde_json::to_string_pretty(stats)?),
    }

    Ok(())
}
