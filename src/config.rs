//! Configuration types for lingofy
//!
//! This module defines:
//! - CLI argument parsing using clap derive macros
//! - Runtime configuration with validation

use crate::engine::EngineConfig;
use crate::error::ConfigError;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output directory used when `--output` is not given
pub const DEFAULT_OUTPUT_DIR: &str = "lingodb";

/// Name of the catalog file written at the root of the output directory
pub const CATALOG_FILE_NAME: &str = "metadata.json";

/// Chunk size limits
const MIN_CHUNK_SIZE: usize = 1;
const MAX_CHUNK_SIZE: usize = 1 << 20;

/// Convert Parquet files into Arrow files plus a JSON schema catalog
#[derive(Parser, Debug, Clone)]
#[command(
    name = "lingofy",
    version,
    about = "Convert Parquet files into Arrow files plus a JSON schema catalog",
    long_about = "Reads one Parquet file or every Parquet file under a directory, writes one \
                  Arrow IPC file per input into the output directory, and records each table's \
                  columns, types, row count and primary-key candidates in metadata.json.",
    after_help = "EXAMPLES:\n    \
        lingofy --input data/orders.parquet\n    \
        lingofy --input data/ --output tpch-db\n    \
        lingofy --input data/ --no-cardinality --if-exists fail"
)]
pub struct CliArgs {
    /// Parquet file or directory to convert
    #[arg(short = 'i', long, value_name = "PATH")]
    pub input: PathBuf,

    /// Output database directory
    #[arg(short = 'o', long, default_value = DEFAULT_OUTPUT_DIR, value_name = "DIR")]
    pub output: PathBuf,

    /// Rows per batch when scanning Parquet files
    #[arg(long, default_value = "1000", value_name = "ROWS")]
    pub chunk_size: usize,

    /// Skip distinct-value counting (no pkey or distinct_values in the catalog)
    #[arg(long)]
    pub no_cardinality: bool,

    /// What to do when the output directory already exists
    #[arg(long, value_enum, default_value_t = OutputPolicy::Reuse, value_name = "POLICY")]
    pub if_exists: OutputPolicy,

    /// Quiet mode - suppress progress output
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// Verbose output (debug logging)
    #[arg(short = 'v', long)]
    pub verbose: bool,
}

/// Policy for an output directory that already exists
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputPolicy {
    /// Write into it, overwriting same-named outputs
    Reuse,
    /// Refuse to run
    Fail,
}

/// Validated runtime configuration
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Input file or directory
    pub input: PathBuf,

    /// Output directory
    pub output_dir: PathBuf,

    /// Existing output directory policy
    pub output_policy: OutputPolicy,

    /// Count distinct values and infer primary-key candidates
    pub track_cardinality: bool,

    /// Query engine settings
    pub engine: EngineConfig,

    /// Show progress bar, header and summary
    pub show_progress: bool,

    /// Verbose logging
    pub verbose: bool,
}

impl ConvertConfig {
    /// Create and validate configuration from CLI arguments
    pub fn from_args(args: CliArgs) -> Result<Self, ConfigError> {
        if args.chunk_size < MIN_CHUNK_SIZE || args.chunk_size > MAX_CHUNK_SIZE {
            return Err(ConfigError::InvalidChunkSize {
                size: args.chunk_size,
                min: MIN_CHUNK_SIZE,
                max: MAX_CHUNK_SIZE,
            });
        }

        if args.output.as_os_str().is_empty() {
            return Err(ConfigError::InvalidOutputPath {
                path: args.output,
                reason: "path is empty".to_string(),
            });
        }

        Ok(Self {
            input: args.input,
            output_dir: args.output,
            output_policy: args.if_exists,
            track_cardinality: !args.no_cardinality,
            engine: EngineConfig {
                batch_size: args.chunk_size,
            },
            show_progress: !args.quiet,
            verbose: args.verbose,
        })
    }

    /// Configuration with defaults for everything but the paths
    pub fn new(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            output_policy: OutputPolicy::Reuse,
            track_cardinality: true,
            engine: EngineConfig::default(),
            show_progress: false,
            verbose: false,
        }
    }

    /// Location of `metadata.json`
    pub fn catalog_path(&self) -> PathBuf {
        self.output_dir.join(CATALOG_FILE_NAME)
    }
}
