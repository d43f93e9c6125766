//! Criterion micro-benchmarks for grid container operations.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quadrille_bench::{wall_grid, wall_grid_mut};
use quadrille_core::Vector;

/// Benchmark: full row-major scan over a 100x100 grid (10K cells).
fn bench_scan_all_10k(c: &mut Criterion) {
    let grid = wall_grid(100);

    c.bench_function("scan_all_10k", |b| {
        b.iter(|| {
            let walls = grid.scan_all().filter(|(_, ch)| **ch == '#').count();
            black_box(walls);
        });
    });
}

/// Benchmark: neighbours() on all 10K cells of a 100x100 grid.
fn bench_neighbours_10k(c: &mut Criterion) {
    let grid = wall_grid(100);

    c.bench_function("neighbours_10k", |b| {
        b.iter(|| {
            for y in 0..100i32 {
                for x in 0..100i32 {
                    let n = grid.neighbours(Vector::new(x, y)).count();
                    black_box(n);
                }
            }
        });
    });
}

/// Benchmark: 100 column insertions into a 100x100 grid.
///
/// Each insertion is O(height) row edits; this measures the structural
/// write path, rebuilding the fixture outside the timed loop.
fn bench_insert_columns(c: &mut Criterion) {
    c.bench_function("insert_100_columns", |b| {
        b.iter_batched(
            || wall_grid_mut(100),
            |mut grid| {
                for i in 0..100i32 {
                    grid.insert_column(i, vec!['|'; 100]).unwrap();
                }
                black_box(grid.width());
            },
            criterion::BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_scan_all_10k,
    bench_neighbours_10k,
    bench_insert_columns
);
criterion_main!(benches);
