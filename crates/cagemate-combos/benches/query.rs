//! Benchmarks for universe generation and cage queries.
//!
//! # Benchmarks
//!
//! - **`generate_universe`**: Builds all 511 combinations from scratch.
//! - **`query`**: Runs representative queries against a prebuilt universe,
//!   from the unconstrained lookup to a cage with restrictions on every cell.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench query
//! ```

use std::hint;

use cagemate_combos::{Query, SumConstraint, Universe, generate_universe};
use cagemate_core::DigitSet;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

fn set(s: &str) -> DigitSet {
    s.parse().unwrap()
}

fn queries() -> Vec<(&'static str, Query)> {
    vec![
        ("unconstrained", Query::new()),
        (
            "exact_sum",
            Query::new()
                .with_sum(SumConstraint::from_sum(23))
                .with_cage_size(4),
        ),
        (
            "sum_range",
            Query::new().with_sum(SumConstraint::from_range(20, 30)),
        ),
        (
            "restricted_cells",
            Query::new()
                .with_sum(SumConstraint::from_sum(30))
                .with_cage_size(6)
                .with_cells([
                    set("1234"),
                    set("2468"),
                    set("3579"),
                    DigitSet::EMPTY,
                    set("56789"),
                    set("789"),
                ])
                .with_may_only_contain(set("1235789")),
        ),
        // Every cell open to every digit, the widest assignment search.
        (
            "nine_open_cells",
            Query::new().with_cells(vec![DigitSet::FULL; 9]),
        ),
    ]
}

fn bench_generate_universe(c: &mut Criterion) {
    c.bench_function("generate_universe", |b| {
        b.iter(|| hint::black_box(generate_universe()));
    });
}

fn bench_query(c: &mut Criterion) {
    let universe = Universe::new();
    for (param, query) in queries() {
        c.bench_with_input(BenchmarkId::new("query", param), &query, |b, query| {
            b.iter(|| universe.query(hint::black_box(query)).len());
        });
    }
}

criterion_group!(benches, bench_generate_universe, bench_query);
criterion_main!(benches);
