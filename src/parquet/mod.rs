//! Parquet input and Arrow output
//!
//! # Module Structure
//!
//! - `schema`: footer-only schema and row count reader, also used for validation
//! - `convert`: Parquet → Arrow IPC file conversion through the query engine

pub mod convert;
pub mod schema;

use std::path::Path;

pub use convert::{
    convert_parquet_to_arrow, output_file_name, prepare_output_dir, ConvertStats, RowsCallback,
};
pub use schema::{read_parquet_schema, validate_parquet, ParquetSchema};

/// Extension of discovered input files
pub const PARQUET_EXTENSION: &str = "parquet";

/// Extension of converted output files
pub const ARROW_EXTENSION: &str = "arrow";

/// Table name for a file: its base name without the final extension.
pub fn table_name(path: &Path) -> Option<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
}
