//! Benchmarks for ranking queries and export parsing
//!
//! Tests the cost of:
//! - Cumulative and best-result standings over large championships
//! - Building all four rendered pages
//! - Parsing a full season export
//!
//! Platform: Cross-platform (synthetic data, CI-safe)

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use podium::test_utils::{export_text, large_championship, test_date};
use podium::{CockpitXpParser, Page};
use std::hint::black_box;

fn bench_standings(c: &mut Criterion) {
    let mut group = c.benchmark_group("standings");

    for drivers in [20usize, 200, 2000] {
        let championship = large_championship(drivers, 12);
        group.throughput(Throughput::Elements(drivers as u64));

        group.bench_with_input(BenchmarkId::new("cumulative", drivers), &championship, |b, ch| {
            b.iter(|| black_box(ch.cumulative_standings()))
        });
        group.bench_with_input(BenchmarkId::new("best_result", drivers), &championship, |b, ch| {
            b.iter(|| black_box(ch.best_result_standings()))
        });
        group.bench_with_input(BenchmarkId::new("all_pages", drivers), &championship, |b, ch| {
            b.iter(|| black_box(Page::build_all(ch)))
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let names: Vec<String> = (0..40).map(|d| format!("Driver {d:02}")).collect();
    let rows: Vec<(&str, u32, u64, u64)> = names
        .iter()
        .enumerate()
        .map(|(i, name)| (name.as_str(), 50 - (i % 5) as u32, 3_600_000 + i as u64 * 1_250, 70_000 + i as u64))
        .collect();
    let events: Vec<&[(&str, u32, u64, u64)]> = (0..12).map(|_| rows.as_slice()).collect();
    let text = export_text(&events);

    let parser = CockpitXpParser::new("Benchmark Cup", test_date());

    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("season_export", |b| b.iter(|| black_box(parser.parse_str(black_box(&text)))));
    group.finish();
}

criterion_group!(benches, bench_standings, bench_parse);
criterion_main!(benches);
