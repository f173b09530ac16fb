//! lingofy - Parquet to Arrow converter
//!
//! Entry point for the CLI application.

use anyhow::{Context, Result};
use clap::Parser;
use lingofy::config::{CliArgs, ConvertConfig};
use lingofy::pipeline::{convert_all, discover_inputs};
use lingofy::progress::{print_header, print_summary, ProgressReporter};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse CLI arguments
    let args = CliArgs::parse();

    // Validate and create config
    let config = ConvertConfig::from_args(args).context("Invalid configuration")?;

    // Setup logging
    setup_logging(config.verbose)?;

    let discovery = discover_inputs(&config).context("Input discovery failed")?;

    if config.show_progress {
        print_header(
            &config.input.display().to_string(),
            &config.output_dir.display().to_string(),
            discovery.len(),
        );
    }

    let progress = if config.show_progress {
        ProgressReporter::new(discovery.len() as u64)
    } else {
        ProgressReporter::hidden()
    };

    // The engine is async; everything else runs sequentially on this thread
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to create async runtime")?;

    let result = match runtime.block_on(convert_all(&config, &discovery, &progress)) {
        Ok(result) => result,
        Err(e) => {
            progress.finish_and_clear();
            return Err(e).context("Conversion failed");
        }
    };

    if config.show_progress {
        progress.finish("done");
        print_summary(
            result.catalog.len(),
            result.total_rows(),
            result.total_bytes(),
            result.rejected.len(),
            result.duration,
            &result.catalog_path.display().to_string(),
        );
    }

    if !result.rejected.is_empty() {
        info!(
            skipped = result.rejected.len(),
            "Skipped unreadable Parquet files"
        );
    }

    Ok(())
}

fn setup_logging(verbose: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("lingofy=debug,warn")
    } else {
        EnvFilter::new("lingofy=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    Ok(())
}
