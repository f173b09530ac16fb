//! lingofy - Parquet to Arrow converter with a JSON schema catalog
//!
//! Converts Parquet files into Arrow IPC files and writes a `metadata.json`
//! catalog describing each table's columns, types, row count and
//! primary-key candidates.
//!
//! # Architecture
//!
//! ```text
//!   --input (file or directory)
//!              │
//!              ▼
//!   ┌──────────────────────┐
//!   │      Discovery       │  accepted files + rejected files with reasons
//!   └──────────┬───────────┘
//!              │
//!              ▼
//!   ┌──────────────────────┐     ┌──────────────────────────┐
//!   │   Catalog Builder    │────▶│  Parquet footer reader   │  schema, num_rows
//!   │  (per file, in order)│     └──────────────────────────┘
//!   │                      │     ┌──────────────────────────┐
//!   │                      │────▶│  DataFusion session      │  COUNT(DISTINCT ..)
//!   └──────────┬───────────┘     └──────────────────────────┘
//!              │
//!              ▼
//!   ┌──────────────────────┐     ┌──────────────────────────┐
//!   │    File Converter    │────▶│  DataFusion scan stream  │
//!   │  (per file, in order)│     └──────────────────────────┘
//!   └──────────┬───────────┘
//!              │  <table>.arrow
//!              ▼
//!   ┌──────────────────────┐
//!   │ <output>/            │
//!   │   <table>.arrow ...  │
//!   │   metadata.json      │
//!   └──────────────────────┘
//! ```
//!
//! # Example
//!
//! ```bash
//! # Single file into ./lingodb
//! lingofy --input data/orders.parquet
//!
//! # Whole directory, fail if the output already exists
//! lingofy --input data/ --output tpch --if-exists fail
//! ```

pub mod catalog;
pub mod config;
pub mod discovery;
pub mod engine;
pub mod error;
pub mod mapping;
pub mod parquet;
pub mod pipeline;
pub mod progress;
pub mod types;

#[cfg(test)]
pub(crate) mod test_support;

pub use catalog::{Catalog, ColumnEntry, TableEntry};
pub use config::{CliArgs, ConvertConfig, OutputPolicy};
pub use discovery::{discover, Discovery, Rejected};
pub use error::{LingofyError, Result};
pub use mapping::map_field;
pub use pipeline::{run, RunResult};
pub use types::{BaseType, FieldDescriptor, PhysicalType, TargetType};
