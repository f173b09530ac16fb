//! Table catalog.
//!
//! - `model`: the `metadata.json` document and its persistence
//! - `builder`: per-file description and accumulation into a catalog

pub mod builder;
pub mod model;

pub use builder::{
    build_catalog, build_columns, describe_table, primary_key_candidates, table_entry,
    BuildOptions, CatalogBuilder,
};
pub use model::{Catalog, ColumnEntry, TableEntry};
