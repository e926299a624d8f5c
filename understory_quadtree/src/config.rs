// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction parameters for a [`Quadtree`](crate::Quadtree).

use crate::error::ConfigError;
use crate::types::Aabb;

/// Half-extent of the default boundary on both axes.
pub const DEFAULT_HALF_EXTENT: f64 = 200.0;

/// Default number of points a node holds before it subdivides.
pub const DEFAULT_CAPACITY: usize = 4;

/// Tree configuration. Fixed for the lifetime of a tree.
///
/// The default is a 400×400 region centered on the origin with capacity 4.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Config {
    /// Region covered by the root node.
    pub boundary: Aabb,
    /// Points held directly by a leaf before it subdivides.
    pub capacity: usize,
    /// Leaves at this depth keep accepting points instead of subdividing.
    ///
    /// `None` subdivides until halving a leaf no longer shrinks it, which is
    /// where coincident points end up sharing a leaf.
    pub depth_limit: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            boundary: Aabb::new(0.0, 0.0, DEFAULT_HALF_EXTENT, DEFAULT_HALF_EXTENT),
            capacity: DEFAULT_CAPACITY,
            depth_limit: None,
        }
    }
}

impl Config {
    /// Default configuration with the given boundary and capacity.
    pub fn new(boundary: Aabb, capacity: usize) -> Self {
        Self {
            boundary,
            capacity,
            ..Self::default()
        }
    }

    /// Replace the boundary.
    #[must_use]
    pub fn with_boundary(mut self, boundary: Aabb) -> Self {
        self.boundary = boundary;
        self
    }

    /// Replace the capacity.
    #[must_use]
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Stop subdividing at `depth_limit`.
    #[must_use]
    pub fn with_depth_limit(mut self, depth_limit: usize) -> Self {
        self.depth_limit = Some(depth_limit);
        self
    }

    /// Check that the configuration can build a tree.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        if !self.boundary.is_valid() {
            let Aabb { cx, cy, hx, hy } = self.boundary;
            return Err(ConfigError::InvalidBoundary { cx, cy, hx, hy });
        }
        if self.depth_limit == Some(0) {
            return Err(ConfigError::ZeroDepthLimit);
        }
        Ok(())
    }
}
