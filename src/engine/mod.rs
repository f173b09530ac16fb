//! Embedded query engine.
//!
//! Wraps a DataFusion session around one Parquet file at a time. The
//! catalog uses it for distinct-value counts; the converter uses it for
//! the full-table scan.

pub mod cardinality;
pub mod context;

pub use cardinality::{distinct_count_sql, quote_ident};
pub use context::{EngineConfig, SourceTable, SOURCE_TABLE};
