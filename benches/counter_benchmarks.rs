// Performance benchmarks for view-counter
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use std::sync::Arc;
use std::thread;
use view_counter::aggregate::structs::aggregate_store::AggregateStore;
use view_counter::codec::structs::snapshot_codec::SnapshotCodec;

fn populated_store(pages: usize, clients: usize) -> AggregateStore {
    let store = AggregateStore::new();
    for i in 0..pages.max(clients) {
        store.record_visit(&format!("page-{}", i % pages), &format!("10.0.{}.{}", (i % clients) / 256, (i % clients) % 256));
    }
    store
}

fn bench_record_visit(c: &mut Criterion) {
    let store = populated_store(100, 1000);

    c.bench_function("record_visit_existing", |b| {
        b.iter(|| {
            store.record_visit(black_box("page-42"), black_box("10.0.1.1"));
        });
    });

    let mut counter = 0u64;
    c.bench_function("record_visit_new_client", |b| {
        b.iter(|| {
            counter += 1;
            store.record_visit(black_box("page-42"), &format!("client-{counter}"));
        });
    });
}

fn bench_record_visit_contended(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_visit_contended");
    for threads in [2usize, 4, 8] {
        group.bench_with_input(BenchmarkId::from_parameter(threads), &threads, |b, &threads| {
            let store = Arc::new(populated_store(100, 1000));
            b.iter(|| {
                let handles: Vec<_> = (0..threads).map(|t| {
                    let store = store.clone();
                    thread::spawn(move || {
                        for i in 0..1000 {
                            store.record_visit(&format!("page-{}", i % 100), &format!("client-{t}"));
                        }
                    })
                }).collect();
                for handle in handles {
                    let _ = handle.join();
                }
            });
        });
    }
    group.finish();
}

fn bench_snapshot(c: &mut Criterion) {
    let mut group = c.benchmark_group("snapshot");
    for size in [100usize, 1_000, 10_000] {
        let store = populated_store(size, size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| black_box(store.snapshot()));
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let snapshot = populated_store(1_000, 1_000).snapshot();
    c.bench_function("encode_snapshot_1000", |b| {
        b.iter(|| black_box(SnapshotCodec.encode(&snapshot)));
    });
}

criterion_group!(benches, bench_record_visit, bench_record_visit_contended, bench_snapshot, bench_encode);
criterion_main!(benches);
