//! Benchmarks for lingofy
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use lingofy::catalog::table_entry;
use lingofy::mapping::map_field;
use lingofy::types::{FieldDescriptor, PhysicalType};

fn wide_schema(columns: usize) -> Vec<FieldDescriptor> {
    let kinds = [
        PhysicalType::Int64,
        PhysicalType::UInt32,
        PhysicalType::Float64,
        PhysicalType::Boolean,
        PhysicalType::Date32,
        PhysicalType::TimestampMicros,
        PhysicalType::Utf8,
    ];
    (0..columns)
        .map(|i| FieldDescriptor::new(format!("c{}", i), kinds[i % kinds.len()].clone(), i % 2 == 0))
        .collect()
}

fn benchmark_map_field(c: &mut Criterion) {
    let field = FieldDescriptor::new("id", PhysicalType::Int64, false);

    c.bench_function("map_field_int64", |b| {
        b.iter(|| black_box(map_field(black_box(&field))))
    });
}

fn benchmark_table_entry(c: &mut Criterion) {
    let fields = wide_schema(200);
    let counts: Vec<u64> = (0..200).map(|i| if i % 3 == 0 { 1_000 } else { 17 }).collect();

    c.bench_function("table_entry_200_columns", |b| {
        b.iter(|| black_box(table_entry(&fields, Some(counts.as_slice()), 1_000)))
    });
}

criterion_group!(benches, benchmark_map_field, benchmark_table_entry);
criterion_main!(benches);
