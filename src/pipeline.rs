//! Batch orchestration.
//!
//! Discovery → catalog over all files → per-file conversion → `metadata.json`.
//! The catalog is written last; if a conversion fails the run stops and no
//! catalog is written, but already-converted files stay on disk.

use crate::catalog::{build_catalog, BuildOptions, Catalog};
use crate::config::ConvertConfig;
use crate::discovery::{discover, Discovery, Rejected};
use crate::error::Result;
use crate::parquet::{
    convert_parquet_to_arrow, prepare_output_dir, table_name, ConvertStats, RowsCallback,
};
use crate::progress::ProgressReporter;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{info, warn};

/// Result of a completed run
#[derive(Debug, Clone)]
pub struct RunResult {
    pub catalog: Catalog,
    pub converted: Vec<ConvertStats>,
    pub rejected: Vec<Rejected>,
    pub catalog_path: PathBuf,
    pub duration: Duration,
}

impl RunResult {
    pub fn total_rows(&self) -> u64 {
        self.converted.iter().map(|s| s.rows_written).sum()
    }

    pub fn total_bytes(&self) -> u64 {
        self.converted.iter().map(|s| s.bytes_written).sum()
    }
}

/// Discover inputs, log rejected files and check table names are unique.
pub fn discover_inputs(config: &ConvertConfig) -> Result<Discovery> {
    let discovery = discover(&config.input)?;

    for rejected in &discovery.rejected {
        warn!(
            path = %rejected.path.display(),
            "Skipping unreadable input: {}",
            rejected.reason
        );
    }

    discovery.ensure_unique_tables()?;
    info!(
        accepted = discovery.accepted.len(),
        rejected = discovery.rejected.len(),
        "Discovered Parquet files in {}",
        config.input.display()
    );
    Ok(discovery)
}

/// Catalog and convert every discovered file, then write the catalog.
pub async fn convert_all(
    config: &ConvertConfig,
    discovery: &Discovery,
    progress: &ProgressReporter,
) -> Result<RunResult> {
    let start = Instant::now();

    prepare_output_dir(&config.output_dir, config.output_policy)?;

    let options = BuildOptions {
        track_cardinality: config.track_cardinality,
        engine: config.engine.clone(),
    };
    let catalog = build_catalog(&discovery.accepted, &options).await?;

    let mut converted = Vec::with_capacity(discovery.accepted.len());
    for input in &discovery.accepted {
        let table = table_name(input).unwrap_or_default();
        progress.start_file(&table);

        let on_rows = |rows: u64| progress.set_rows(&table, rows);
        let stats = convert_parquet_to_arrow(
            input,
            &config.output_dir,
            &config.engine,
            Some(&on_rows as RowsCallback<'_>),
        )
        .await?;

        progress.file_done();
        converted.push(stats);
    }

    let catalog_path = config.catalog_path();
    catalog.save(&catalog_path)?;
    info!(
        tables = catalog.len(),
        "Wrote catalog {}",
        catalog_path.display()
    );

    Ok(RunResult {
        catalog,
        converted,
        rejected: discovery.rejected.clone(),
        catalog_path,
        duration: start.elapsed(),
    })
}

/// Full run without any terminal output.
pub async fn run(config: &ConvertConfig) -> Result<RunResult> {
    let discovery = discover_inputs(config)?;
    convert_all(config, &discovery, &ProgressReporter::hidden()).await
}
