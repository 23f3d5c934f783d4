//! Benchmark for query parsing and record filtering.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use saham_core::{normalize_rows, query::Parser, screener, RawRecord, RawValue, Record};

fn build_records(count: usize) -> Vec<Record> {
    let raw: Vec<RawRecord> = (0..count)
        .map(|i| {
            let mut r = RawRecord::new();
            r.insert(
                screener::CODE.to_string(),
                RawValue::Text(format!("S{i:04}")),
            );
            r.insert(
                screener::PER.to_string(),
                RawValue::Number((i % 40) as f64),
            );
            r.insert(
                screener::ROE.to_string(),
                RawValue::Text(format!("{}.5%", i % 30)),
            );
            r.insert(screener::PBV.to_string(), RawValue::Number((i % 5) as f64));
            r
        })
        .collect();
    normalize_rows(&screener::columns(), &raw)
}

fn filter_benchmark(c: &mut Criterion) {
    let records = build_records(1000);
    let aliases = screener::aliases();

    c.bench_function("parse_query", |b| {
        b.iter(|| Parser::parse(black_box("PER < 12 AND ROE > 15 AND PBV < 2"), &aliases));
    });

    let query = Parser::parse("PER < 12 AND ROE > 15 AND PBV < 2", &aliases);
    c.bench_function("filter_1k_records", |b| {
        b.iter(|| query.filter(black_box(&records)).len());
    });
}

criterion_group!(benches, filter_benchmark);
criterion_main!(benches);
