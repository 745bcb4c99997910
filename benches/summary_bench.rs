//! Benchmarks for summary derivation, rendering and the load cycle
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use matchboard::backend::MemorySource;
use matchboard::dashboard::{render, DashboardEvent, DashboardState, Fixtures, SummaryMetrics};
use matchboard::loader::{DataLoader, LoadResult};
use matchboard::records::{Collections, Table};
use serde_json::{json, Value};
use std::sync::Arc;

fn participant_rows(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("Participant {}", i),
                "is_identified": i % 3 == 0,
                "satisfaction": (i % 100) as f64,
            })
        })
        .collect()
}

fn collections(count: usize) -> Collections {
    Collections {
        participants: participant_rows(count)
            .into_iter()
            .map(|row| serde_json::from_value(row).unwrap())
            .collect(),
        ..Default::default()
    }
}

fn bench_summary(c: &mut Criterion) {
    let mut group = c.benchmark_group("summary");

    for size in [100, 1000, 10000] {
        let collections = collections(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_function(format!("derive_{}", size), |b| {
            b.iter(|| SummaryMetrics::derive(black_box(&collections)))
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let fixtures = Fixtures::default();
    let state = DashboardState::mounted().apply(DashboardEvent::FetchSettled(LoadResult {
        collections: collections(1000),
        ..Default::default()
    }));

    c.bench_function("render_dashboard", |b| {
        b.iter(|| render(black_box(&state), &fixtures))
    });
}

fn bench_load(c: &mut Criterion) {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let mut source = MemorySource::new().with_rows(Table::Participants, participant_rows(1000));
    for table in [Table::Matches, Table::Meetings, Table::Insights] {
        source = source.with_rows(table, vec![json!({"id": 1}); 500]);
    }
    let loader = DataLoader::new(Arc::new(source));

    c.bench_function("load_six_tables", |b| {
        b.iter(|| runtime.block_on(loader.load()))
    });
}

criterion_group!(benches, bench_summary, bench_render, bench_load);
criterion_main!(benches);
