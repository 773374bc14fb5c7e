//! Benchmarks for event insertion.
//!
//! Insertion is O(n²) in the size of the cluster being joined, so the
//! interesting axis is how crowded the day is rather than how many events
//! it holds.
//!
//! Run with: cargo bench -p dayview-layout --bench layout_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use dayview_layout::{Interval, LayoutConfig, LayoutEngine, NullRenderer};
use std::hint::black_box;

/// `count` events spread over a day; smaller `stride` means heavier overlap.
fn day(count: i64, stride: i64, length: i64) -> Vec<Interval> {
    (0..count)
        .map(|i| {
            let start = (i * stride) % 1380;
            Interval::new(start, start + length).expect("valid interval")
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/insert");

    for (name, stride, length) in [("sparse", 60, 30), ("chained", 20, 45), ("stacked", 1, 60)] {
        for count in [10i64, 50, 200] {
            let intervals = day(count, stride, length);
            group.throughput(Throughput::Elements(count as u64));
            group.bench_with_input(
                BenchmarkId::new(name, count),
                &intervals,
                |b, intervals| {
                    b.iter(|| {
                        let mut engine =
                            LayoutEngine::new(LayoutConfig::default(), NullRenderer)
                                .expect("valid config");
                        for &interval in intervals {
                            black_box(engine.add_interval(interval));
                        }
                        engine
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_insert);
criterion_main!(benches);
