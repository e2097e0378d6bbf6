//! Benchmark for the Option and Result combinators.
//!
//! Compares the combinators against the equivalent std chains, and measures
//! the cost of the run-time checks on dynamic values.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use explicit::control::{Maybe, Outcome, err, ok, some};
use explicit::dynamic::Value;
use explicit::policy;
use std::hint::black_box;

// =============================================================================
// Maybe vs Option
// =============================================================================

fn benchmark_maybe_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("maybe_chain");

    group.bench_function("maybe_map_and_then", |bencher| {
        bencher.iter(|| {
            let value: Maybe<i32> = some(black_box(42));
            black_box(
                value
                    .map(|n| n * 2)
                    .and_then(|n| if n > 0 { some(n) } else { Maybe::None })
                    .unwrap_or(0),
            )
        });
    });

    group.bench_function("std_map_and_then", |bencher| {
        bencher.iter(|| {
            let value: Option<i32> = Some(black_box(42));
            black_box(
                value
                    .map(|n| n * 2)
                    .and_then(|n| if n > 0 { Some(n) } else { None })
                    .unwrap_or(0),
            )
        });
    });

    group.bench_function("maybe_zip_with", |bencher| {
        bencher.iter(|| black_box(some(black_box(2)).zip_with(some(black_box(3)), |a, b| a * b)));
    });

    group.finish();
}

// =============================================================================
// Outcome vs Result
// =============================================================================

fn benchmark_outcome_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("outcome_chain");

    group.bench_function("outcome_and_then_or_else", |bencher| {
        bencher.iter(|| {
            let value: Outcome<i32, &str> = ok(black_box(7));
            black_box(
                value
                    .and_then(|n| if n % 2 == 0 { ok(n) } else { err("odd") })
                    .or_else(|_| ok::<i32, ()>(0))
                    .unwrap_or(-1),
            )
        });
    });

    group.bench_function("std_and_then_or_else", |bencher| {
        bencher.iter(|| {
            let value: Result<i32, &str> = Ok(black_box(7));
            black_box(
                value
                    .and_then(|n| if n % 2 == 0 { Ok(n) } else { Err("odd") })
                    .or_else(|_| Ok::<i32, ()>(0))
                    .unwrap_or(-1),
            )
        });
    });

    group.finish();
}

// =============================================================================
// Dynamic Checks
// =============================================================================

fn benchmark_dynamic_and_then(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("dynamic_and_then");

    for size in [10, 100, 1000] {
        let values: Vec<Maybe<Value>> = (0..size).map(|n| some(Value::from(n))).collect();
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("strict", size), &values, |bencher, values| {
            bencher.iter(|| {
                values
                    .iter()
                    .cloned()
                    .filter_map(|value| value.and_then_value(Value::some).ok())
                    .count()
            });
        });

        group.bench_with_input(BenchmarkId::new("lenient", size), &values, |bencher, values| {
            bencher.iter(|| {
                policy::lenient(|| {
                    values
                        .iter()
                        .cloned()
                        .filter_map(|value| value.and_then_value(|n| n).ok())
                        .count()
                })
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_maybe_chain,
    benchmark_outcome_chain,
    benchmark_dynamic_and_then,
);

criterion_main!(benches);
