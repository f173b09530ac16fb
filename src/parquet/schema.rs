//! Parquet footer reader
//!
//! Reads the Arrow schema and row count from a Parquet file's metadata
//! without touching any data pages.

use crate::error::SchemaError;
use crate::types::FieldDescriptor;
use arrow::datatypes::SchemaRef;
use parquet::arrow::arrow_reader::{ArrowReaderMetadata, ArrowReaderOptions};
use std::fs::File;
use std::path::Path;

/// Schema and size of one Parquet file
#[derive(Debug, Clone)]
pub struct ParquetSchema {
    /// Arrow schema decoded from the footer
    pub schema: SchemaRef,
    /// Total rows across all row groups
    pub num_rows: u64,
}

impl ParquetSchema {
    /// Column descriptors in declared order
    pub fn fields(&self) -> Vec<FieldDescriptor> {
        self.schema
            .fields()
            .iter()
            .map(|f| FieldDescriptor::from_arrow(f))
            .collect()
    }

    /// Column names in declared order
    pub fn column_names(&self) -> Vec<String> {
        self.schema.fields().iter().map(|f| f.name().clone()).collect()
    }
}

/// Read schema and row count from a Parquet file's footer.
pub fn read_parquet_schema(path: impl AsRef<Path>) -> Result<ParquetSchema, SchemaError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SchemaError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let metadata = ArrowReaderMetadata::load(&file, ArrowReaderOptions::default()).map_err(
        |source| SchemaError::Metadata {
            path: path.to_path_buf(),
            source,
        },
    )?;

    let num_rows = metadata.metadata().file_metadata().num_rows().max(0) as u64;

    Ok(ParquetSchema {
        schema: metadata.schema().clone(),
        num_rows,
    })
}

/// Check that a file is readable as Parquet.
pub fn validate_parquet(path: impl AsRef<Path>) -> Result<(), SchemaError> {
    read_parquet_schema(path).map(|_| ())
}
