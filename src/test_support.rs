//! Parquet fixtures for unit tests

use arrow::array::{ArrayRef, Int64Array, StringArray};
use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Write one Parquet file, one row group per batch of columns.
pub fn write_parquet(
    dir: &Path,
    name: &str,
    schema: SchemaRef,
    batches: Vec<Vec<ArrayRef>>,
) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    let mut writer = ArrowWriter::try_new(file, schema.clone(), None).unwrap();
    for columns in batches {
        let batch = RecordBatch::try_new(schema.clone(), columns).unwrap();
        writer.write(&batch).unwrap();
        writer.flush().unwrap();
    }
    writer.close().unwrap();
    path
}

/// Five rows: unique `id`, unique `name`, `team` with repeats and a null.
pub fn write_people_parquet(dir: &Path, name: &str) -> PathBuf {
    let schema = Arc::new(Schema::new(vec![
        Field::new("id", DataType::Int64, false),
        Field::new("name", DataType::Utf8, false),
        Field::new("team", DataType::Utf8, true),
    ]));
    let columns: Vec<ArrayRef> = vec![
        Arc::new(Int64Array::from(vec![1, 2, 3, 4, 5])),
        Arc::new(StringArray::from(vec!["ann", "bob", "cat", "dan", "eve"])),
        Arc::new(StringArray::from(vec![
            Some("red"),
            Some("blue"),
            Some("red"),
            None,
            Some("blue"),
        ])),
    ];
    write_parquet(dir, name, schema, vec![columns])
}
