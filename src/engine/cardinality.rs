//! Distinct-value counts.
//!
//! All columns of a table are counted in one aggregate query instead of one
//! full scan per column. Nulls are not counted.

use super::context::{SourceTable, SOURCE_TABLE};
use crate::error::{EngineError, EngineResult};
use arrow::array::{Array, Int64Array};
use tracing::debug;

/// Quote an identifier for DataFusion SQL, doubling embedded quotes.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

/// Build `SELECT COUNT(DISTINCT "a") AS "d0", ... FROM "table"`.
pub fn distinct_count_sql(table: &str, columns: &[String]) -> String {
    let aggregates: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, name)| format!("COUNT(DISTINCT {}) AS \"d{}\"", quote_ident(name), i))
        .collect();
    format!("SELECT {} FROM {}", aggregates.join(", "), quote_ident(table))
}

impl SourceTable {
    /// Count distinct non-null values for each column, in the order given.
    pub async fn distinct_counts(&self, columns: &[String]) -> EngineResult<Vec<u64>> {
        if columns.is_empty() {
            return Ok(vec![]);
        }

        let sql = distinct_count_sql(SOURCE_TABLE, columns);
        debug!(path = %self.path().display(), columns = columns.len(), "Counting distinct values");

        let batches = self.ctx.sql(&sql).await?.collect().await?;
        let batch = batches
            .iter()
            .find(|b| b.num_rows() > 0)
            .ok_or_else(|| EngineError::UnexpectedResult("distinct count returned no rows".into()))?;

        if batch.num_columns() != columns.len() {
            return Err(EngineError::UnexpectedResult(format!(
                "expected {} count columns, got {}",
                columns.len(),
                batch.num_columns()
            )));
        }

        batch
            .columns()
            .iter()
            .zip(columns)
            .map(|(array, name)| {
                let counts = array
                    .as_any()
                    .downcast_ref::<Int64Array>()
                    .ok_or_else(|| {
                        EngineError::UnexpectedResult(format!(
                            "count for '{}' has type {}",
                            name,
                            array.data_type()
                        ))
                    })?;
                if counts.is_null(0) {
                    return Ok(0);
                }
                Ok(counts.value(0).max(0) as u64)
            })
            .collect()
    }
}
