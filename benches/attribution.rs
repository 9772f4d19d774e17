//! Performance benchmarks for exact Shapley attribution.
//!
//! Run with: `cargo bench --bench attribution`
//!
//! ## Cost Model
//!
//! | Operation | Coalitions visited | Notes |
//! |-----------|--------------------|-------|
//! | Single feature | 2^(n-1) | Two table lookups per coalition |
//! | All features | n * 2^(n-1) | One single-feature pass per feature |

use criterion::{
    black_box, criterion_group, criterion_main,
    BenchmarkId, Criterion, Throughput,
};

use shapley_attribution::{OutcomeTable, compute_shapley_value, get_shapley_values};

/// Complete game over `n` features with a non-additive outcome.
fn make_table(n: usize) -> OutcomeTable<u16> {
    (0usize..(1 << n))
        .map(|mask| {
            let members: Vec<u16> = (0..n as u16).filter(|i| mask & (1 << *i) != 0).collect();
            let linear: f64 = members.iter().map(|&i| (i as f64 + 1.0) * 0.5).sum();
            let interaction = (members.len() as f64).powi(2) * 0.1;
            (members, linear + interaction)
        })
        .collect()
}

/// Benchmark attributing one feature.
fn bench_single_feature(c: &mut Criterion) {
    let mut group = c.benchmark_group("single_feature");

    for n in [4, 8, 12] {
        let table = make_table(n);

        group.throughput(Throughput::Elements(1 << (n - 1)));
        group.bench_with_input(BenchmarkId::new("features", n), &table, |b, table| {
            b.iter(|| compute_shapley_value(black_box(table), black_box(&0)).unwrap())
        });
    }

    group.finish();
}

/// Benchmark attributing every feature.
fn bench_all_features(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_features");

    for n in [4, 8, 12] {
        let table = make_table(n);

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("features", n), &table, |b, table| {
            b.iter(|| {
                let values = get_shapley_values(black_box(table)).unwrap();
                assert_eq!(values.len(), n);
                values
            })
        });
    }

    group.finish();
}

/// Benchmark building a table from unsorted coalitions.
fn bench_table_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_construction");

    for n in [8, 12] {
        let entries: Vec<(Vec<u16>, f64)> = (0usize..(1 << n))
            .map(|mask| {
                let mut members: Vec<u16> =
                    (0..n as u16).filter(|i| mask & (1 << *i) != 0).collect();
                members.reverse();
                (members, mask as f64)
            })
            .collect();

        group.throughput(Throughput::Elements(entries.len() as u64));
        group.bench_with_input(BenchmarkId::new("features", n), &entries, |b, entries| {
            b.iter(|| OutcomeTable::from_iter(black_box(entries).iter().cloned()))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_single_feature,
    bench_all_features,
    bench_table_construction,
);
criterion_main!(benches);
