//! Criterion benchmarks for pricing and attendance aggregation

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fitdesk::services::{Aggregator, PricingEngine};
use fitdesk::types::{AttendanceStore, Catalog};
use std::hint::black_box;

fn bench_pricing(c: &mut Criterion) {
    let catalog = Catalog::default();
    let engine = PricingEngine::new(&catalog.plans, &catalog.promo_codes);

    let mut group = c.benchmark_group("price_membership");
    group.bench_function("stacked_discounts", |b| {
        b.iter(|| {
            engine
                .price_membership(black_box("Premium"), black_box(12), true, Some("welcome10"))
                .ok()
        })
    });
    group.bench_function("unknown_promo", |b| {
        b.iter(|| {
            engine
                .price_membership(black_box("Basic"), black_box(1), false, Some("NOPE"))
                .ok()
        })
    });
    group.finish();
}

fn bench_attendance(c: &mut Criterion) {
    let mut group = c.benchmark_group("attendance");

    for activities in [10usize, 50] {
        let names: Vec<String> = (0..activities).map(|i| format!("Activity {}", i)).collect();
        group.throughput(Throughput::Elements(activities as u64));

        group.bench_with_input(
            BenchmarkId::new("add_and_summarize", activities),
            &names,
            |b, names| {
                b.iter(|| {
                    let mut store = AttendanceStore::new();
                    for (i, name) in names.iter().enumerate() {
                        let _ = Aggregator::add_entry(&mut store, name, i as i64);
                    }
                    black_box(Aggregator::summarize(&store))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_pricing, bench_attendance);
criterion_main!(benches);
