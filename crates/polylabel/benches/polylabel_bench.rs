//! Criterion benchmarks for the search and its hot paths.
//! Focus sizes: vertex counts n in {8, 32, 128, 512}, precision in {1, 0.1}.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use nalgebra::Vector2;
use polylabel::sample::{draw_star_polygon, ReplayToken, StarCfg, VertexCount};
use polylabel::{signed_distance, solve, LabelCfg, Polygon, PriorityQueue, Scoring};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn star(n: usize, hole: bool) -> Polygon {
    let cfg = StarCfg {
        vertex_count: VertexCount::Fixed(n),
        hole_scale: hole.then_some(0.25),
        ..StarCfg::default()
    };
    draw_star_polygon(cfg, ReplayToken { seed: 43, index: n as u64 }).unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("solve");
    for &n in &[8usize, 32, 128, 512] {
        let poly = star(n, true);
        for &precision in &[1.0f64, 0.1] {
            for scoring in [Scoring::CentroidBiased, Scoring::Distance] {
                let id = format!("{scoring:?}/p={precision}");
                let cfg = LabelCfg { precision, scoring };
                group.bench_with_input(BenchmarkId::new(id, n), &poly, |b, poly| {
                    b.iter(|| solve(poly, &cfg).unwrap())
                });
            }
        }
    }
    group.finish();
}

fn bench_distance(c: &mut Criterion) {
    let mut group = c.benchmark_group("signed_distance");
    for &n in &[8usize, 128, 512] {
        let poly = star(n, true);
        let mut rng = StdRng::seed_from_u64(44);
        let probes: Vec<Vector2<f64>> = (0..256)
            .map(|_| Vector2::new(rng.gen_range(-150.0..150.0), rng.gen_range(-150.0..150.0)))
            .collect();
        group.bench_with_input(BenchmarkId::new("probe256", n), &poly, |b, poly| {
            b.iter(|| probes.iter().map(|&p| signed_distance(p, poly)).sum::<f64>())
        });
    }
    group.finish();
}

fn bench_queue(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue");
    for &m in &[100usize, 10_000] {
        group.bench_with_input(BenchmarkId::new("enqueue_drain", m), &m, |b, &m| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(45);
                    (0..m).map(|_| rng.gen::<f64>()).collect::<Vec<_>>()
                },
                |values| {
                    let mut q = PriorityQueue::new();
                    for v in values {
                        q.enqueue(v);
                    }
                    q.into_sorted_vec()
                },
                BatchSize::SmallInput,
            )
        });
        group.bench_with_input(BenchmarkId::new("heapify_drain", m), &m, |b, &m| {
            b.iter_batched(
                || {
                    let mut rng = StdRng::seed_from_u64(46);
                    (0..m).map(|_| rng.gen::<f64>()).collect::<Vec<_>>()
                },
                |values| PriorityQueue::from_vec(values).into_sorted_vec(),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve, bench_distance, bench_queue);
criterion_main!(benches);
