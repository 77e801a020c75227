//! Benchmark for the aggregation utilities.
//!
//! Compares the free functions against the equivalent `std` collection
//! through `Option`/`Result`, and measures how early short-circuiting pays
//! off when the stopping element is near the front.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use totality::{
    AllResults, Fallible, Optional, TryAllResults, all_optionals, all_results, any_results,
    failure, success, try_all_results,
};

// =============================================================================
// Homogeneous Sequence Benchmarks
// =============================================================================

fn benchmark_all_optionals(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("all_optionals");

    for size in [100, 1000, 10000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("totality", size), &size, |bencher, &size| {
            let items: Vec<Optional<i32>> = (0..size).map(Optional::Present).collect();
            bencher.iter(|| black_box(all_optionals(items.iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("std_collect", size), &size, |bencher, &size| {
            let items: Vec<Option<i32>> = (0..size).map(Some).collect();
            bencher.iter(|| black_box(items.iter().copied().collect::<Option<Vec<i32>>>()));
        });
    }

    group.finish();
}

fn benchmark_all_results_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("all_results_short_circuit");

    for position in [0, 500, 999] {
        group.bench_with_input(
            BenchmarkId::new("failure_at", position),
            &position,
            |bencher, &position| {
                let items: Vec<Fallible<i32, i32>> = (0..1000)
                    .map(|n| if n == position { failure(n) } else { success(n) })
                    .collect();
                bencher.iter(|| black_box(all_results(items.iter().copied())));
            },
        );
    }

    group.finish();
}

fn benchmark_exhaustive_vs_short_circuit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("exhaustive_vs_short_circuit");
    let items: Vec<Fallible<i32, i32>> = (0..1000)
        .map(|n| if n % 10 == 0 { failure(n) } else { success(n) })
        .collect();

    group.bench_function("all_results", |bencher| {
        bencher.iter(|| black_box(all_results(items.iter().copied())));
    });

    group.bench_function("try_all_results", |bencher| {
        bencher.iter(|| black_box(try_all_results(items.iter().copied())));
    });

    group.bench_function("any_results_all_failing", |bencher| {
        let failing: Vec<Fallible<i32, i32>> = (0..1000).map(failure).collect();
        bencher.iter(|| black_box(any_results(failing.iter().copied())));
    });

    group.finish();
}

// =============================================================================
// Tuple Benchmarks
// =============================================================================

fn benchmark_tuples(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("tuple_aggregation");

    group.bench_function("all_results_triple", |bencher| {
        bencher.iter(|| {
            let triple = (
                success::<i32, &str>(black_box(1)),
                success::<&str, &str>(black_box("two")),
                success::<bool, &str>(black_box(true)),
            );
            black_box(triple.all_results())
        });
    });

    group.bench_function("try_all_results_triple", |bencher| {
        bencher.iter(|| {
            let triple = (
                success::<i32, &str>(black_box(1)),
                failure::<u8, u16>(black_box(404)),
                failure::<bool, &str>(black_box("late")),
            );
            black_box(triple.try_all_results())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_all_optionals,
    benchmark_all_results_short_circuit,
    benchmark_exhaustive_vs_short_circuit,
    benchmark_tuples,
);

criterion_main!(benches);
