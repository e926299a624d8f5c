// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree datasets.
//!
//! Build trees from a tight cluster and from well-separated points, and report
//! how each one subdivides.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_datasets`
//! - `cargo run -p understory_demos --example quadtree_datasets -- cluster`
//! - `RUST_LOG=trace cargo run -p understory_demos --example quadtree_datasets -- sparse`

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Config, Point, Quadtree};

struct Dataset {
    name: &'static str,
    capacity: usize,
    points: &'static [(f64, f64)],
}

const CLUSTER: Dataset = Dataset {
    name: "cluster",
    capacity: 3,
    points: &[
        (10.0, 10.0),
        (15.0, 15.0),
        (10.0, 20.0),
        (18.0, 18.0),
        (20.0, 10.0),
        (-150.0, -150.0),
        (150.0, 150.0),
        (12.0, 12.0),
        (5.0, 5.0),
    ],
};

const SPARSE: Dataset = Dataset {
    name: "sparse",
    capacity: 5,
    points: &[
        (180.0, 180.0),
        (-180.0, 180.0),
        (-180.0, -180.0),
        (180.0, -180.0),
        (0.0, 0.0),
        (50.0, 50.0),
        (-50.0, 50.0),
        (0.0, 100.0),
        (100.0, 0.0),
    ],
};

fn build(dataset: &Dataset) -> Quadtree {
    let config = Config::default().with_capacity(dataset.capacity);
    let mut qt = Quadtree::with_config(config).expect("dataset capacity is non-zero");
    for &(x, y) in dataset.points {
        if !qt.insert(Point::new(x, y)) {
            warn!(x, y, "point outside the boundary was dropped");
        }
    }
    qt
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let wanted = std::env::args().nth(1);
    for dataset in [CLUSTER, SPARSE] {
        if wanted.as_deref().is_some_and(|w| w != dataset.name) {
            continue;
        }
        let qt = build(&dataset);
        let stats = qt.stats();
        info!(
            dataset = dataset.name,
            capacity = qt.capacity(),
            points = stats.points,
            nodes = stats.nodes,
            leaves = stats.leaves,
            max_depth = stats.max_depth,
            internal = stats.internal(),
            occupancy = stats.mean_leaf_occupancy(),
            "built tree"
        );
        for (i, b) in qt.boundaries().iter().enumerate() {
            let (min_x, min_y, max_x, max_y) = b.edges();
            println!("  node {i:>2}: [{min_x}, {max_x}] x [{min_y}, {max_y}]");
        }
        println!("  points in traversal order: {:?}", qt.points());
    }
}
