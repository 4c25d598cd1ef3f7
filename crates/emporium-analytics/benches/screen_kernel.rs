//! Benchmarks for the screening transforms.
//!
//! Run with: cargo bench -p emporium-analytics

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use emporium_analytics::prelude::*;
use emporium_core::precision::fc32;
use emporium_core::QuoteTable;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn create_quotes(rows: usize) -> QuoteTable {
    let col = |f: &dyn Fn(f64) -> f64| (0..rows).map(|i| f(i as f64)).collect::<Vec<f64>>();
    QuoteTable::from_columns([
        ("ask_front", col(&|x| 2.10 + (x % 17.0) * 0.05)),
        ("bid_front", col(&|x| 2.00 + (x % 17.0) * 0.05)),
        ("ask_back", col(&|x| 3.40 + (x % 23.0) * 0.05)),
        ("bid_back", col(&|x| 3.20 + (x % 23.0) * 0.05)),
        ("mark_front", col(&|x| 2.05 + (x % 17.0) * 0.05)),
        ("mark_back", col(&|x| 3.30 + (x % 23.0) * 0.05)),
        ("strike", col(&|x| 400.0 + (x % 40.0) * 5.0)),
        ("underlying", col(&|_| 498.75)),
    ])
    .expect("equal-length columns")
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_fc32(c: &mut Criterion) {
    let values: Vec<f64> = (0..100_000).map(|i| f64::from(i) / 7.0).collect();
    let mut group = c.benchmark_group("fc32");
    group.throughput(Throughput::Elements(values.len() as u64));
    group.bench_function("100k", |b| b.iter(|| fc32(black_box(values.as_slice()))));
    group.finish();
}

fn bench_screen(c: &mut Criterion) {
    let config = CalendarConfig::default();
    let mut group = c.benchmark_group("screen");
    for rows in [1_000usize, 10_000, 100_000] {
        let table = create_quotes(rows);
        group.throughput(Throughput::Elements(rows as u64));
        group.bench_with_input(BenchmarkId::from_parameter(rows), &table, |b, t| {
            b.iter(|| screen(black_box(t), &config))
        });
    }
    group.finish();
}

fn bench_calendar_spread(c: &mut Criterion) {
    let table = create_quotes(10_000);
    c.bench_function("calculate_cal_spread/10k", |b| {
        b.iter(|| calculate_cal_spread(black_box(&table)))
    });
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(precision, bench_fc32);
criterion_group!(transforms, bench_screen, bench_calendar_spread);

criterion_main!(precision, transforms);
