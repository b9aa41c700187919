//! Benchmarks for the collapse/propagation hot path.

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use quilt_board::{Board, SelectionPolicy, StepOutcome};
use quilt_test_utils::coastline_catalog;

/// Full solve of a 32x32 coastline board under the deterministic
/// policy. Dominated by propagation, so this tracks the worklist cost.
fn bench_solve_32x32_min_entropy(c: &mut Criterion) {
    c.bench_function("solve_32x32_min_entropy", |b| {
        b.iter(|| {
            let mut board = Board::with_seed(
                32,
                32,
                Box::new(coastline_catalog(2048)),
                SelectionPolicy::MinEntropy,
                7,
            )
            .unwrap();
            let mut steps = 0u32;
            loop {
                match board.step().unwrap() {
                    StepOutcome::Progressed(_) => steps += 1,
                    _ => break,
                }
            }
            black_box(steps)
        });
    });
}

/// Single first step on a large board: one collapse plus the widest
/// propagation frontier, with selection scanning every cell.
fn bench_first_step_64x64_weighted(c: &mut Criterion) {
    c.bench_function("first_step_64x64_weighted", |b| {
        b.iter(|| {
            let mut board = Board::with_seed(
                64,
                64,
                Box::new(coastline_catalog(8192)),
                SelectionPolicy::WeightedRandom { k: 1.0 },
                7,
            )
            .unwrap();
            black_box(board.step().unwrap())
        });
    });
}

criterion_group!(
    benches,
    bench_solve_32x32_min_entropy,
    bench_first_step_64x64_weighted
);
criterion_main!(benches);
