// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_quadtree::{Config, Point, Quadtree};

use rstar::RTree;

fn gen_grid_points(n: usize, half: f64) -> Vec<Point> {
    let step = 2.0 * half / n as f64;
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let px = -half + (x as f64 + 0.5) * step;
            let py = -half + (y as f64 + 0.5) * step;
            out.push(Point::new(px, py));
        }
    }
    out
}

fn bench_build_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_external_compare");
    for &n in &[64usize, 128] {
        let points = gen_grid_points(n, 200.0);
        group.throughput(Throughput::Elements((n * n) as u64));

        group.bench_function(format!("understory_build_collect_n{}", n), |b| {
            b.iter_batched(
                || Quadtree::with_config(Config::default().with_capacity(8)).unwrap(),
                |mut qt| {
                    qt.extend(points.iter().copied());
                    black_box(qt.points().len());
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_collect_bulk_n{}", n), |b| {
            b.iter_batched(
                || points.iter().map(|p| [p.x, p.y]).collect::<Vec<_>>(),
                |coords| {
                    let tree = RTree::bulk_load(coords);
                    black_box(tree.iter().count());
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_external_compare);
criterion_main!(benches);
