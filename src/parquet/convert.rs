//! Parquet to Arrow IPC conversion
//!
//! Streams every row of a Parquet file through the query engine and writes
//! the batches to an Arrow IPC file with the source schema.

use crate::config::OutputPolicy;
use crate::engine::{EngineConfig, SourceTable};
use crate::error::{ConvertError, ConvertResult};
use crate::parquet::{table_name, ARROW_EXTENSION};
use arrow::ipc::writer::FileWriter;
use futures::StreamExt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Statistics from converting one file
#[derive(Debug, Clone)]
pub struct ConvertStats {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows_written: u64,
    pub batches_written: u64,
    pub bytes_written: u64,
}

/// Rows-written callback, called after each batch with the running total
pub type RowsCallback<'a> = &'a (dyn Fn(u64) + Send + Sync);

/// Output file name for an input: file stem plus `.arrow`.
pub fn output_file_name(input: &Path) -> ConvertResult<String> {
    let stem = table_name(input).ok_or_else(|| ConvertError::InvalidInputName {
        path: input.to_path_buf(),
    })?;
    Ok(format!("{}.{}", stem, ARROW_EXTENSION))
}

/// Apply the output directory policy, creating the directory when allowed.
pub fn prepare_output_dir(dir: &Path, policy: OutputPolicy) -> ConvertResult<()> {
    if dir.exists() {
        if !dir.is_dir() {
            return Err(ConvertError::OutputNotDirectory {
                path: dir.to_path_buf(),
            });
        }
        return match policy {
            OutputPolicy::Reuse => {
                debug!(dir = %dir.display(), "Reusing existing output directory");
                Ok(())
            }
            OutputPolicy::Fail => Err(ConvertError::OutputExists {
                path: dir.to_path_buf(),
            }),
        };
    }

    fs::create_dir_all(dir)?;
    info!("Created output directory: {}", dir.display());
    Ok(())
}

/// Convert one Parquet file to `<output_dir>/<stem>.arrow`.
///
/// The output directory must already exist. A partially written file is
/// left in place if the scan or write fails.
pub async fn convert_parquet_to_arrow(
    input: &Path,
    output_dir: &Path,
    engine: &EngineConfig,
    on_rows: Option<RowsCallback<'_>>,
) -> ConvertResult<ConvertStats> {
    let output = output_dir.join(output_file_name(input)?);

    let source = SourceTable::open(input, engine).await?;
    let mut stream = source.scan().await?;
    let schema = stream.schema();

    let file = File::create(&output)?;
    let mut writer = FileWriter::try_new(BufWriter::new(file), &schema)?;

    let mut rows_written: u64 = 0;
    let mut batches_written: u64 = 0;

    while let Some(batch) = stream.next().await {
        let batch = batch.map_err(crate::error::EngineError::from)?;
        writer.write(&batch)?;
        rows_written += batch.num_rows() as u64;
        batches_written += 1;

        if let Some(cb) = on_rows {
            cb(rows_written);
        }
    }

    writer.finish()?;
    writer.into_inner()?.flush()?;

    let bytes_written = fs::metadata(&output)?.len();

    info!(
        rows = rows_written,
        batches = batches_written,
        "Wrote {}",
        output.display()
    );

    Ok(ConvertStats {
        input: input.to_path_buf(),
        output,
        rows_written,
        batches_written,
        bytes_written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parquet::read_parquet_schema;
    use crate::test_support::{write_parquet, write_people_parquet};
    use arrow::array::{ArrayRef, Date32Array, Int64Array, StringArray, TimestampMillisecondArray};
    use arrow::datatypes::{DataType, Field, Schema, TimeUnit};
    use arrow::ipc::reader::FileReader;
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::sync::Arc;
    use tempfile::tempdir;

    fn read_arrow(path: &Path) -> (arrow::datatypes::SchemaRef, usize, Vec<i64>) {
        let reader = FileReader::try_new(File::open(path).unwrap(), None).unwrap();
        let schema = reader.schema();
        let mut rows = 0;
        let mut ids = Vec::new();
        for batch in reader {
            let batch = batch.unwrap();
            rows += batch.num_rows();
            if let Some(col) = batch.column(0).as_any().downcast_ref::<Int64Array>() {
                ids.extend(col.values().iter().copied());
            }
        }
        (schema, rows, ids)
    }

    #[test]
    fn test_output_file_name() {
        assert_eq!(
            output_file_name(Path::new("/data/orders.parquet")).unwrap(),
            "orders.arrow"
        );
        assert_eq!(
            output_file_name(Path::new("nested/dir/lineitem.snappy.parquet")).unwrap(),
            "lineitem.snappy.arrow"
        );
        assert!(output_file_name(Path::new("/")).is_err());
    }

    #[test]
    fn test_prepare_output_dir_policies() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("a").join("lingodb");

        prepare_output_dir(&out, OutputPolicy::Reuse).unwrap();
        assert!(out.is_dir());
        prepare_output_dir(&out, OutputPolicy::Reuse).unwrap();

        let err = prepare_output_dir(&out, OutputPolicy::Fail).unwrap_err();
        assert!(matches!(err, ConvertError::OutputExists { .. }));

        let fresh = dir.path().join("fresh");
        prepare_output_dir(&fresh, OutputPolicy::Fail).unwrap();
        assert!(fresh.is_dir());

        let file = dir.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        let err = prepare_output_dir(&file, OutputPolicy::Reuse).unwrap_err();
        assert!(matches!(err, ConvertError::OutputNotDirectory { .. }));
    }

    #[tokio::test]
    async fn test_convert_preserves_schema_and_rows() {
        let dir = tempdir().unwrap();
        let input = write_people_parquet(dir.path(), "people.parquet");
        let out = dir.path().join("out");
        fs::create_dir(&out).unwrap();

        let stats = convert_parquet_to_arrow(&input, &out, &EngineConfig { batch_size: 2 }, None)
            .await
            .unwrap();

        assert_eq!(stats.output, out.join("people.arrow"));
        assert_eq!(stats.rows_written, 5);
        assert!(stats.batches_written >= 3);
        assert!(stats.bytes_written > 0);

        let source = read_parquet_schema(&input).unwrap();
        let (schema, rows, ids) = read_arrow(&stats.output);
        assert_eq!(rows, 5);
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(schema.fields().len(), source.schema.fields().len());
        for (got, want) in schema.fields().iter().zip(source.schema.fields()) {
            assert_eq!(got.name(), want.name());
            assert_eq!(got.data_type(), want.data_type());
            assert_eq!(got.is_nullable(), want.is_nullable());
        }
    }

    #[tokio::test]
    async fn test_convert_temporal_columns() {
        let dir = tempdir().unwrap();
        let schema = Arc::new(Schema::new(vec![
            Field::new("day", DataType::Date32, false),
            Field::new(
                "at",
                DataType::Timestamp(TimeUnit::Millisecond, None),
                true,
            ),
            Field::new("label", DataType::Utf8, true),
        ]));
        let columns: Vec<ArrayRef> = vec![
            Arc::new(Date32Array::from(vec![19000, 19001])),
            Arc::new(TimestampMillisecondArray::from(vec![Some(1_700_000_000_000), None])),
            Arc::new(StringArray::from(vec![Some("a"), None])),
        ];
        let input = write_parquet(dir.path(), "events.parquet", schema.clone(), vec![columns]);

        let stats = convert_parquet_to_arrow(&input, dir.path(), &EngineConfig::default(), None)
            .await
            .unwrap();
        let (out_schema, rows, _) = read_arrow(&stats.output);
        assert_eq!(rows, 2);
        let types: Vec<DataType> = out_schema
            .fields()
            .iter()
            .map(|f| f.data_type().clone())
            .collect();
        let expected: Vec<DataType> = schema
            .fields()
            .iter()
            .map(|f| f.data_type().clone())
            .collect();
        assert_eq!(types, expected);
    }

    #[tokio::test]
    async fn test_rows_callback_reports_running_total() {
        let dir = tempdir().unwrap();
        let input = write_people_parquet(dir.path(), "people.parquet");

        let last = AtomicU64::new(0);
        let cb = |rows: u64| last.store(rows, Ordering::SeqCst);
        let stats = convert_parquet_to_arrow(
            &input,
            dir.path(),
            &EngineConfig { batch_size: 1 },
            Some(&cb as RowsCallback<'_>),
        )
        .await
        .unwrap();

        assert_eq!(last.load(Ordering::SeqCst), stats.rows_written);
    }

    #[tokio::test]
    async fn test_convert_invalid_input_fails() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("broken.parquet");
        fs::write(&input, b"not parquet").unwrap();

        let result =
            convert_parquet_to_arrow(&input, dir.path(), &EngineConfig::default(), None).await;
        assert!(matches!(result, Err(ConvertError::Engine(_))));
    }
}
