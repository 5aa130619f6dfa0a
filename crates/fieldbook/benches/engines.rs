//! Criterion microbenches for the two engines.
//!
//! - Traverse: pillar propagation plus area over leg counts {1, 10, 50, 200}.
//! - Matrix: evaluate_all over square dimensions {2, 5, 10, 25}.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use fieldbook::matrix::evaluate_all;
use fieldbook::traverse::{compute_area, compute_pillars, Leg, TraverseCfg};
use nalgebra::{DMatrix, Vector2};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_legs(n: usize, seed: u64) -> Vec<Leg> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| Leg::new(rng.gen_range(1.0..500.0), rng.gen_range(0.0..360.0)))
        .collect()
}

fn random_matrix(dim: usize, seed: u64) -> DMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    DMatrix::from_fn(dim, dim, |_, _| rng.gen_range(-100.0..100.0))
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    for &n in &[1usize, 10, 50, 200] {
        group.bench_with_input(BenchmarkId::new("pillars_and_area", n), &n, |b, &n| {
            let origin = Vector2::new(1000.0, 1000.0);
            b.iter_batched(
                || random_legs(n, 17),
                |legs| {
                    let pillars = compute_pillars(origin, &legs);
                    compute_area(&pillars, TraverseCfg::default())
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_matrix(c: &mut Criterion) {
    let mut group = c.benchmark_group("matrix");
    for &dim in &[2usize, 5, 10, 25] {
        group.bench_with_input(BenchmarkId::new("evaluate_all", dim), &dim, |b, &dim| {
            b.iter_batched(
                || (random_matrix(dim, 19), random_matrix(dim, 23)),
                |(a, b2)| evaluate_all(&a, &b2),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_traverse, bench_matrix);
criterion_main!(benches);
