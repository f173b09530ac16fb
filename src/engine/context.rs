//! DataFusion SessionContext setup for a single Parquet source.

use crate::error::{EngineError, EngineResult};
use datafusion::execution::SendableRecordBatchStream;
use datafusion::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;
use url::Url;

/// Name the source file is registered under
pub const SOURCE_TABLE: &str = "parquet_source";

/// Default rows per batch produced by scans
pub const DEFAULT_BATCH_SIZE: usize = 1_000;

/// Engine session settings
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Rows per RecordBatch produced by scans
    pub batch_size: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// A Parquet file registered as a queryable table in its own session
pub struct SourceTable {
    pub(crate) ctx: SessionContext,
    path: PathBuf,
}

impl SourceTable {
    /// Open a session over `path`.
    ///
    /// Scans run on a single partition so batches come back in file order,
    /// and Parquet strings are read as `Utf8`/`Binary` rather than view types
    /// so scan output keeps the file's declared schema.
    pub async fn open(path: &Path, config: &EngineConfig) -> EngineResult<Self> {
        // A bare path is split into prefix and glob, so `[`, `*` and `?` in a
        // file name would match nothing. A URL with a scheme is taken literally.
        let location = std::path::absolute(path)
            .ok()
            .and_then(|p| Url::from_file_path(p).ok())
            .ok_or_else(|| EngineError::InvalidSource {
                path: path.to_path_buf(),
                reason: "cannot build a file URL".to_string(),
            })?;

        let mut session = SessionConfig::new()
            .with_target_partitions(1)
            .with_batch_size(config.batch_size.max(1));
        session.options_mut().execution.parquet.schema_force_view_types = false;
        let ctx = SessionContext::new_with_config(session);

        // Listing tables filter by extension even for a single file, so match
        // whatever this file is called.
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| format!(".{}", e))
            .unwrap_or_default();
        let options = ParquetReadOptions {
            file_extension: &extension,
            ..Default::default()
        };

        ctx.register_parquet(SOURCE_TABLE, location.as_str(), options)
            .await?;
        debug!(path = %path.display(), "Registered Parquet source");

        Ok(Self {
            ctx,
            path: path.to_path_buf(),
        })
    }

    /// Path of the registered file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stream every row of the source, unordered beyond file order.
    pub async fn scan(&self) -> EngineResult<SendableRecordBatchStream> {
        let sql = format!("SELECT * FROM {}", super::quote_ident(SOURCE_TABLE));
        let df = self.ctx.sql(&sql).await?;
        Ok(df.execute_stream().await?)
    }
}
