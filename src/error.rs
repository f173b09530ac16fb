//! Error types for lingofy
//!
//! This module defines the error hierarchy that covers:
//! - Input path discovery and Parquet validation
//! - Parquet footer (schema) reading
//! - Query engine failures (cardinality and scans)
//! - Arrow IPC conversion
//! - Catalog persistence
//! - Configuration and CLI errors
//!
//! Every operation is attempt-once: errors propagate to the orchestrator,
//! which aborts the run on the first one.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for the lingofy library
#[derive(Error, Debug)]
pub enum LingofyError {
    /// Input discovery errors (bad path, no files, invalid single file)
    #[error("Discovery error: {0}")]
    Discovery(#[from] DiscoveryError),

    /// Parquet metadata errors
    #[error("Schema error: {0}")]
    Schema(#[from] SchemaError),

    /// Query engine errors
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),

    /// Arrow conversion errors
    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    /// Catalog persistence errors
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Input path errors
#[derive(Error, Debug)]
pub enum DiscoveryError {
    /// Input path does not exist
    #[error("'{path}' does not exist")]
    NotFound { path: PathBuf },

    /// Input path exists but is neither a regular file nor a directory
    #[error("'{path}' is neither a file nor a directory")]
    UnsupportedPathKind { path: PathBuf },

    /// Directory scan found no readable Parquet files
    #[error("No Parquet files found in the directory: '{path}'")]
    NoParquetFiles { path: PathBuf },

    /// Directory walk failed
    #[error("Failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A single input file failed format validation
    #[error("'{path}' is not a valid Parquet file: {reason}")]
    InvalidParquet { path: PathBuf, reason: String },

    /// Two input files map to the same table name
    #[error("Table '{table}' is produced by both '{first}' and '{second}'")]
    DuplicateTable {
        table: String,
        first: PathBuf,
        second: PathBuf,
    },
}

impl DiscoveryError {
    /// Check if this error is about the input path itself rather than file contents
    pub fn is_path_error(&self) -> bool {
        matches!(
            self,
            DiscoveryError::NotFound { .. }
                | DiscoveryError::UnsupportedPathKind { .. }
                | DiscoveryError::NoParquetFiles { .. }
                | DiscoveryError::ReadDir { .. }
        )
    }
}

/// Parquet footer errors
#[derive(Error, Debug)]
pub enum SchemaError {
    /// Failed to open the file
    #[error("Failed to open '{path}': {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Footer or schema could not be decoded
    #[error("Failed to read Parquet metadata from '{path}': {source}")]
    Metadata {
        path: PathBuf,
        source: parquet::errors::ParquetError,
    },
}

/// Query engine errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// DataFusion planning or execution error
    #[error("DataFusion error: {0}")]
    DataFusion(#[from] datafusion::error::DataFusionError),

    /// Arrow error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Source path cannot be registered with the engine
    #[error("Cannot register '{path}': {reason}")]
    InvalidSource { path: PathBuf, reason: String },

    /// Query returned something other than the expected shape
    #[error("Unexpected query result: {0}")]
    UnexpectedResult(String),
}

/// Arrow IPC conversion errors
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Output directory exists and the policy forbids reuse
    #[error("Output directory '{path}' already exists")]
    OutputExists { path: PathBuf },

    /// Output path exists but is not a directory
    #[error("Output path '{path}' is not a directory")]
    OutputNotDirectory { path: PathBuf },

    /// Input has no usable file stem
    #[error("Cannot derive an output name from '{path}'")]
    InvalidInputName { path: PathBuf },

    /// Arrow writer error
    #[error("Arrow error: {0}")]
    Arrow(#[from] arrow::error::ArrowError),

    /// Engine error during the scan
    #[error("Scan failed: {0}")]
    Engine(#[from] EngineError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Catalog persistence errors
#[derive(Error, Debug)]
pub enum CatalogError {
    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration and CLI errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Chunk size out of range
    #[error("Invalid chunk size {size}: must be between {min} and {max}")]
    InvalidChunkSize { size: usize, min: usize, max: usize },

    /// Output path error
    #[error("Invalid output path '{path}': {reason}")]
    InvalidOutputPath { path: PathBuf, reason: String },
}

/// Result type alias for LingofyError
pub type Result<T> = std::result::Result<T, LingofyError>;

/// Result type alias for DiscoveryError
pub type DiscoveryResult<T> = std::result::Result<T, DiscoveryError>;

/// Result type alias for EngineError
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Result type alias for ConvertError
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;
