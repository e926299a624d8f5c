// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Arena node storage and a read-only view over it.

use alloc::vec::Vec;
use core::fmt::{self, Debug};

use kurbo::{Point, Rect};

use crate::types::{Aabb, Quadrant};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeIdx(usize);

impl NodeIdx {
    pub(crate) const ROOT: Self = Self(0);

    pub(crate) const fn new(i: usize) -> Self {
        Self(i)
    }

    pub(crate) const fn get(self) -> usize {
        self.0
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Node {
    pub(crate) boundary: Aabb,
    // Exact edges used for routing. Children split it at `boundary.center()`.
    pub(crate) region: Rect,
    pub(crate) depth: usize,
    // Empty once `children` is set.
    pub(crate) points: Vec<Point>,
    // NE, NW, SE, SW.
    pub(crate) children: Option<[NodeIdx; 4]>,
}

impl Node {
    pub(crate) const fn leaf(boundary: Aabb, region: Rect, depth: usize) -> Self {
        Self {
            boundary,
            region,
            depth,
            points: Vec::new(),
            children: None,
        }
    }
}

/// Borrowed view of one node of a [`Quadtree`](crate::Quadtree).
///
/// Obtained from [`Quadtree::root`](crate::Quadtree::root) and by walking
/// [`NodeRef::children`].
#[derive(Copy, Clone)]
pub struct NodeRef<'a> {
    nodes: &'a [Node],
    idx: NodeIdx,
    capacity: usize,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(nodes: &'a [Node], idx: NodeIdx, capacity: usize) -> Self {
        Self {
            nodes,
            idx,
            capacity,
        }
    }

    fn node(&self) -> &'a Node {
        &self.nodes[self.idx.get()]
    }

    /// Region covered by this node.
    pub fn boundary(&self) -> Aabb {
        self.node().boundary
    }

    /// Edges that decide which points this node accepts.
    ///
    /// Matches [`boundary`](Self::boundary) up to rounding. Sibling regions
    /// share their split coordinate exactly, so they leave no gaps.
    pub fn region(&self) -> Rect {
        self.node().region
    }

    /// Points held directly before subdividing; shared by every node of a tree.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Distance from the root. The root has depth 0.
    pub fn depth(&self) -> usize {
        self.node().depth
    }

    /// Points held directly by this node, in local insertion order.
    ///
    /// Always empty for a subdivided node.
    pub fn points(&self) -> &'a [Point] {
        &self.node().points
    }

    /// Whether this node has been split into four children.
    pub fn is_subdivided(&self) -> bool {
        self.node().children.is_some()
    }

    /// The child covering `quadrant`, if this node is subdivided.
    pub fn child(&self, quadrant: Quadrant) -> Option<Self> {
        let children = self.node().children?;
        Some(self.at(children[quadrant.index()]))
    }

    /// All four children in NE, NW, SE, SW order, if this node is subdivided.
    pub fn children(&self) -> Option<[Self; 4]> {
        let children = self.node().children?;
        Some(children.map(|c| self.at(c)))
    }

    /// Append the boundary of this node and every descendant, in pre-order.
    pub fn collect_boundaries(&self, out: &mut Vec<Aabb>) {
        out.push(self.boundary());
        for child in self.children().into_iter().flatten() {
            child.collect_boundaries(out);
        }
    }

    /// Append every point stored in this subtree.
    ///
    /// Nodes are visited in pre-order and each leaf contributes its points in
    /// local insertion order, so the result is generally not the global
    /// insertion order.
    pub fn collect_points(&self, out: &mut Vec<Point>) {
        out.extend_from_slice(self.points());
        for child in self.children().into_iter().flatten() {
            child.collect_points(out);
        }
    }

    /// Deepest leaf depth in this subtree.
    pub fn max_depth(&self) -> usize {
        match self.children() {
            None => self.depth(),
            Some(children) => children
                .iter()
                .map(Self::max_depth)
                .max()
                .unwrap_or(self.depth()),
        }
    }

    /// Number of nodes in this subtree, this one included.
    pub fn node_count(&self) -> usize {
        1 + self
            .children()
            .map_or(0, |children| children.iter().map(Self::node_count).sum())
    }

    fn at(&self, idx: NodeIdx) -> Self {
        Self::new(self.nodes, idx, self.capacity)
    }
}

impl Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("boundary", &self.boundary())
            .field("depth", &self.depth())
            .field("points", &self.points().len())
            .field("subdivided", &self.is_subdivided())
            .finish_non_exhaustive()
    }
}
