// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Summary counts returned by [`Quadtree::stats`](crate::Quadtree::stats).

/// Shape of a tree at one point in time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Points stored across all leaves.
    pub points: usize,
    /// Nodes in the tree, root included. Equal to the number of boundaries.
    pub nodes: usize,
    /// Nodes that have not been subdivided.
    pub leaves: usize,
    /// Deepest leaf depth.
    pub max_depth: usize,
}

impl Stats {
    /// Nodes that have been subdivided.
    pub fn internal(&self) -> usize {
        self.nodes - self.leaves
    }

    /// Mean number of points per leaf.
    pub fn mean_leaf_occupancy(&self) -> f64 {
        if self.leaves == 0 {
            return 0.0;
        }
        self.points as f64 / self.leaves as f64
    }
}
