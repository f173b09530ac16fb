//! Catalog construction.
//!
//! Column typing is a pure per-field mapping; primary-key detection is a
//! separate pass over the finished column list.

use crate::catalog::model::{Catalog, ColumnEntry, TableEntry};
use crate::engine::{EngineConfig, SourceTable};
use crate::error::{DiscoveryError, Result};
use crate::mapping::map_field;
use crate::parquet::{read_parquet_schema, table_name};
use crate::types::FieldDescriptor;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Options for describing tables
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Count distinct values per column and infer primary-key candidates
    pub track_cardinality: bool,
    pub engine: EngineConfig,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            track_cardinality: true,
            engine: EngineConfig::default(),
        }
    }
}

/// Type each field; attach distinct counts position by position when given.
pub fn build_columns(fields: &[FieldDescriptor], distinct: Option<&[u64]>) -> Vec<ColumnEntry> {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| ColumnEntry {
            name: field.name.clone(),
            column_type: map_field(field),
            distinct_values: distinct.and_then(|counts| counts.get(i).copied()),
        })
        .collect()
}

/// Columns whose distinct count equals the row count, in column order.
pub fn primary_key_candidates(columns: &[ColumnEntry], num_rows: u64) -> Vec<String> {
    columns
        .iter()
        .filter(|c| c.distinct_values == Some(num_rows))
        .map(|c| c.name.clone())
        .collect()
}

/// Assemble a table entry from its fields, optional counts and row count
pub fn table_entry(fields: &[FieldDescriptor], distinct: Option<&[u64]>, num_rows: u64) -> TableEntry {
    let columns = build_columns(fields, distinct);
    let pkey = primary_key_candidates(&columns, num_rows);
    TableEntry {
        pkey,
        num_rows,
        columns,
    }
}

/// Describe one Parquet file: footer schema, types, and optionally cardinalities.
pub async fn describe_table(path: &Path, options: &BuildOptions) -> Result<TableEntry> {
    let schema = read_parquet_schema(path)?;
    let fields = schema.fields();

    let distinct = if options.track_cardinality {
        let source = SourceTable::open(path, &options.engine).await?;
        Some(source.distinct_counts(&schema.column_names()).await?)
    } else {
        None
    };

    let entry = table_entry(&fields, distinct.as_deref(), schema.num_rows);
    debug!(
        path = %path.display(),
        rows = entry.num_rows,
        columns = entry.columns.len(),
        unmapped = entry.columns.iter().filter(|c| !c.column_type.is_mapped()).count(),
        pkey = ?entry.pkey,
        "Described table"
    );
    Ok(entry)
}

/// Accumulates table entries into a catalog
pub struct CatalogBuilder {
    options: BuildOptions,
    catalog: Catalog,
    sources: HashMap<String, PathBuf>,
}

impl CatalogBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self {
            options,
            catalog: Catalog::new(),
            sources: HashMap::new(),
        }
    }

    /// Describe `path` and add it under its table name.
    pub async fn add_file(&mut self, path: &Path) -> Result<&TableEntry> {
        let name = table_name(path).ok_or_else(|| DiscoveryError::InvalidParquet {
            path: path.to_path_buf(),
            reason: "file has no name".to_string(),
        })?;

        if let Some(first) = self.sources.get(&name) {
            return Err(DiscoveryError::DuplicateTable {
                table: name,
                first: first.clone(),
                second: path.to_path_buf(),
            }
            .into());
        }

        let entry = describe_table(path, &self.options).await?;
        info!(
            table = %name,
            rows = entry.num_rows,
            columns = entry.columns.len(),
            "Cataloged table"
        );

        self.sources.insert(name.clone(), path.to_path_buf());
        Ok(self.catalog.tables.entry(name).or_insert(entry))
    }

    pub fn finish(self) -> Catalog {
        self.catalog
    }
}

/// Build a catalog over `files`, in order, failing on the first error.
pub async fn build_catalog(files: &[PathBuf], options: &BuildOptions) -> Result<Catalog> {
    let mut builder = CatalogBuilder::new(options.clone());
    for file in files {
        builder.add_file(file).await?;
    }
    Ok(builder.finish())
}
