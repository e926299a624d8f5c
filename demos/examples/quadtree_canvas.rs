// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Quadtree canvas mapping.
//!
//! Keep a point list and a capacity, rebuild the tree whenever either changes,
//! and map its boundaries and points into a 400×400 canvas with y pointing up.
//!
//! Run:
//! - `cargo run -p understory_demos --example quadtree_canvas`

use kurbo::{Affine, Circle, Point, Rect};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use understory_quadtree::{Config, Quadtree};

const CANVAS_SIZE: f64 = 400.0;
const BOUNDARY_MAX: f64 = CANVAS_SIZE / 2.0;
const POINT_RADIUS: f64 = 4.0;

/// Owns the inputs; the tree is derived state.
struct Scene {
    capacity: usize,
    points: Vec<Point>,
    tree: Quadtree,
}

impl Scene {
    fn new(capacity: usize) -> Self {
        Self {
            capacity,
            points: Vec::new(),
            tree: Self::rebuild(capacity, &[]),
        }
    }

    fn rebuild(capacity: usize, points: &[Point]) -> Quadtree {
        let config = Config::default().with_capacity(capacity.max(1));
        let mut tree = Quadtree::with_config(config).expect("capacity clamped to at least 1");
        let stored = tree.extend(points.iter().copied());
        debug_assert_eq!(stored, points.len(), "points are range-checked on entry");
        tree
    }

    fn add_point(&mut self, x: f64, y: f64) {
        let in_range = |v: f64| (-BOUNDARY_MAX..=BOUNDARY_MAX).contains(&v);
        if !in_range(x) || !in_range(y) {
            warn!(x, y, "coordinates must be between -200 and 200");
            return;
        }
        self.points.push(Point::new(x, y));
        self.tree = Self::rebuild(self.capacity, &self.points);
    }

    fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
        self.tree = Self::rebuild(self.capacity, &self.points);
    }

    /// World coordinates centered on the origin to canvas pixels, y flipped.
    fn to_canvas() -> Affine {
        Affine::new([1.0, 0.0, 0.0, -1.0, BOUNDARY_MAX, BOUNDARY_MAX])
    }

    fn rects(&self) -> Vec<Rect> {
        let xf = Self::to_canvas();
        self.tree
            .boundaries()
            .into_iter()
            .map(|b| xf.transform_rect_bbox(b.into()))
            .collect()
    }

    fn dots(&self) -> Vec<Circle> {
        let xf = Self::to_canvas();
        self.tree
            .points()
            .into_iter()
            .map(|p| Circle::new(xf * p, POINT_RADIUS))
            .collect()
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut scene = Scene::new(4);
    for (x, y) in [
        (10.0, 10.0),
        (15.0, 15.0),
        (-120.0, 80.0),
        (12.0, 18.0),
        (17.0, 11.0),
        (250.0, 0.0),
        (160.0, -170.0),
    ] {
        scene.add_point(x, y);
    }
    info!(
        nodes = scene.tree.node_count(),
        max_depth = scene.tree.max_depth(),
        "capacity 4"
    );

    scene.set_capacity(1);
    let stats = scene.tree.stats();
    info!(
        nodes = stats.nodes,
        max_depth = stats.max_depth,
        "capacity 1"
    );
    assert_eq!(stats.points, 6, "the out-of-range point never reaches the tree");

    for r in scene.rects() {
        println!(
            "strokeRect({}, {}, {}, {})",
            r.x0,
            r.y0,
            r.width(),
            r.height()
        );
    }
    for c in scene.dots() {
        println!("arc({}, {}, {})", c.center.x, c.center.y, c.radius);
    }
}
