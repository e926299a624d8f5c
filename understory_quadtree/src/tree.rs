// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Quadtree` API: construction, insertion, and ordered traversal.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug};

use kurbo::Point;

use crate::config::Config;
use crate::error::{ConfigError, InsertError};
use crate::node::{Node, NodeIdx, NodeRef};
use crate::stats::Stats;
use crate::types::{Aabb, Quadrant, can_split, region_contains, split_region};

/// A point-region quadtree over a fixed boundary.
///
/// Each leaf holds at most `capacity` points. The first insertion that would
/// exceed it splits the leaf into four quadrants and moves its points down.
/// A leaf too small to split further, or at the configured depth limit, keeps
/// accepting points instead.
/// Nodes are never merged or removed; rebuild the tree to change its
/// configuration.
#[derive(Clone)]
pub struct Quadtree {
    config: Config,
    nodes: Vec<Node>,
    len: usize,
}

impl Quadtree {
    /// Create an empty tree covering `boundary`.
    ///
    /// Fails if `capacity` is zero or `boundary` has a non-finite center or
    /// non-positive half-extents.
    pub fn new(boundary: Aabb, capacity: usize) -> Result<Self, ConfigError> {
        Self::with_config(Config::new(boundary, capacity))
    }

    /// Create an empty tree from a full configuration.
    pub fn with_config(config: Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: Config) -> Self {
        Self {
            config,
            nodes: vec![Node::leaf(config.boundary, config.boundary.to_rect(), 0)],
            len: 0,
        }
    }

    /// The configuration this tree was built with.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Region covered by the root.
    pub fn boundary(&self) -> Aabb {
        self.config.boundary
    }

    /// Points a leaf holds before it subdivides.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Depth at which leaves stop subdividing, if one was configured.
    pub fn depth_limit(&self) -> Option<usize> {
        self.config.depth_limit
    }

    /// Insert a point. Returns `false` if the point lies outside the boundary.
    ///
    /// Duplicates are stored as separate points.
    pub fn insert(&mut self, point: Point) -> bool {
        self.try_insert(point).is_ok()
    }

    /// Insert a point, reporting why it was not stored.
    ///
    /// [`InsertError::Unplaced`] signals a broken quadrant partition and
    /// fails a debug assertion.
    pub fn try_insert(&mut self, point: Point) -> Result<(), InsertError> {
        if !region_contains(&self.nodes[NodeIdx::ROOT.get()].region, point) {
            return Err(InsertError::OutOfBounds);
        }
        let placed = self.insert_node(point);
        report_unplaced(placed, point);
        if !placed {
            return Err(InsertError::Unplaced);
        }
        self.len += 1;
        Ok(())
    }

    /// Insert points in order. Returns how many were stored.
    pub fn extend<I: IntoIterator<Item = Point>>(&mut self, points: I) -> usize {
        points.into_iter().filter(|&p| self.insert(p)).count()
    }

    /// Read-only view of the root node.
    pub fn root(&self) -> NodeRef<'_> {
        NodeRef::new(&self.nodes, NodeIdx::ROOT, self.config.capacity)
    }

    /// Append every node's boundary, root first, in pre-order (NE, NW, SE, SW).
    pub fn collect_boundaries(&self, out: &mut Vec<Aabb>) {
        self.root().collect_boundaries(out);
    }

    /// Every node's boundary, root first, in pre-order (NE, NW, SE, SW).
    pub fn boundaries(&self) -> Vec<Aabb> {
        let mut out = Vec::with_capacity(self.nodes.len());
        self.collect_boundaries(&mut out);
        out
    }

    /// Append every stored point. See [`NodeRef::collect_points`] for ordering.
    pub fn collect_points(&self, out: &mut Vec<Point>) {
        self.root().collect_points(out);
    }

    /// Every stored point. See [`NodeRef::collect_points`] for ordering.
    pub fn points(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.len);
        self.collect_points(&mut out);
        out
    }

    /// Deepest leaf depth; 0 until the root subdivides.
    pub fn max_depth(&self) -> usize {
        self.root().max_depth()
    }

    /// Number of nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether no point has been stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Summary counts for display.
    pub fn stats(&self) -> Stats {
        let mut stats = Stats {
            nodes: self.nodes.len(),
            ..Stats::default()
        };
        for node in self.nodes.iter().filter(|n| n.children.is_none()) {
            stats.leaves += 1;
            stats.points += node.points.len();
            stats.max_depth = stats.max_depth.max(node.depth);
        }
        stats
    }

    fn insert_node(&mut self, point: Point) -> bool {
        let mut idx = NodeIdx::ROOT;
        loop {
            let node = &self.nodes[idx.get()];
            if let Some(children) = node.children {
                match self.child_for(children, point) {
                    Some(child) => idx = child,
                    None => return false,
                }
                continue;
            }
            if node.points.len() < self.config.capacity || !self.can_subdivide(node) {
                self.nodes[idx.get()].points.push(point);
                return true;
            }
            // Revisit `idx` as an internal node.
            self.subdivide(idx);
        }
    }

    /// First child in NE, NW, SE, SW order whose region holds `point`.
    fn child_for(&self, children: [NodeIdx; 4], point: Point) -> Option<NodeIdx> {
        children
            .into_iter()
            .find(|child| region_contains(&self.nodes[child.get()].region, point))
    }

    fn can_subdivide(&self, node: &Node) -> bool {
        self.config
            .depth_limit
            .is_none_or(|limit| node.depth < limit)
            && can_split(&node.region, node.boundary.center())
    }

    fn subdivide(&mut self, idx: NodeIdx) {
        let node = &mut self.nodes[idx.get()];
        let boundary = node.boundary;
        let region = node.region;
        let depth = node.depth + 1;
        let points = core::mem::take(&mut node.points);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            cx = boundary.cx,
            cy = boundary.cy,
            depth,
            points = points.len(),
            "subdividing node"
        );

        let center = boundary.center();
        let children = Quadrant::ALL.map(|q| {
            let child_region = split_region(&region, center, q);
            self.nodes
                .push(Node::leaf(boundary.quadrant(q), child_region, depth));
            NodeIdx::new(self.nodes.len() - 1)
        });
        self.nodes[idx.get()].children = Some(children);

        // The parent held exactly `capacity` points, so no child overflows here.
        for point in points {
            let child = self.child_for(children, point);
            report_unplaced(child.is_some(), point);
            match child {
                Some(child) => self.nodes[child.get()].points.push(point),
                None => self.len -= 1,
            }
        }
    }
}

fn report_unplaced(placed: bool, point: Point) {
    #[cfg(feature = "tracing")]
    {
        if !placed {
            tracing::warn!(x = point.x, y = point.y, "no quadrant accepted point");
        }
    }
    debug_assert!(
        placed,
        "point ({}, {}) is inside the boundary but no quadrant accepted it",
        point.x, point.y
    );
}

impl Debug for Quadtree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Quadtree")
            .field("config", &self.config)
            .field("len", &self.len)
            .field("nodes", &self.nodes.len())
            .finish_non_exhaustive()
    }
}

impl Default for Quadtree {
    fn default() -> Self {
        Self::from_valid(Config::default())
    }
}
