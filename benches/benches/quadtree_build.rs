// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Config, Point, Quadtree};

const HALF: f64 = 200.0;

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
    /// Uniform in `[-HALF, HALF)`.
    fn next_coord(&mut self) -> f64 {
        (self.next_f64() * 2.0 - 1.0) * HALF
    }
}

fn gen_uniform_points(count: usize) -> Vec<Point> {
    let mut rng = Rng::new(0xCAFE_F00D_DEAD_BEEF);
    (0..count)
        .map(|_| Point::new(rng.next_coord(), rng.next_coord()))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Point> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_coord() * 0.9, rng.next_coord() * 0.9));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Point::new(cx + dx, cy + dy));
        }
    }
    out
}

fn tree(capacity: usize) -> Quadtree {
    Quadtree::with_config(Config::default().with_capacity(capacity)).unwrap()
}

fn bench_insert_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_uniform");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_uniform_points(n);
        group.throughput(Throughput::Elements(n as u64));
        for &capacity in &[1usize, 4, 16] {
            group.bench_function(format!("n{}_cap{}", n, capacity), |b| {
                b.iter_batched(
                    || tree(capacity),
                    |mut qt| {
                        let stored = qt.extend(points.iter().copied());
                        black_box(stored);
                    },
                    BatchSize::SmallInput,
                )
            });
        }
    }
    group.finish();
}

fn bench_insert_clustered(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_clustered");
    for &spread in &[40.0, 4.0, 0.4] {
        let points = gen_clustered_points(16, 1024, spread);
        group.throughput(Throughput::Elements(points.len() as u64));
        group.bench_function(format!("spread{}", spread), |b| {
            b.iter_batched(
                || tree(4),
                |mut qt| {
                    let stored = qt.extend(points.iter().copied());
                    black_box((stored, qt.max_depth()));
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_traverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("traverse");
    let mut qt = tree(4);
    qt.extend(gen_uniform_points(50_000));
    group.throughput(Throughput::Elements(qt.node_count() as u64));
    group.bench_function("boundaries", |b| {
        let mut out = Vec::with_capacity(qt.node_count());
        b.iter(|| {
            out.clear();
            qt.collect_boundaries(&mut out);
            black_box(out.len());
        })
    });
    group.bench_function("points", |b| {
        let mut out = Vec::with_capacity(qt.len());
        b.iter(|| {
            out.clear();
            qt.collect_points(&mut out);
            black_box(out.len());
        })
    });
    group.bench_function("max_depth", |b| b.iter(|| black_box(qt.max_depth())));
    group.bench_function("stats", |b| b.iter(|| black_box(qt.stats())));
    group.finish();
}

criterion_group!(
    benches,
    bench_insert_uniform,
    bench_insert_clustered,
    bench_traverse,
);
criterion_main!(benches);
