// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types for tree construction and insertion.

use thiserror::Error;

/// Rejected tree configuration.
#[derive(Copy, Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    /// A node must be able to hold at least one point.
    #[error("capacity must be at least 1")]
    ZeroCapacity,

    /// Non-finite center or non-positive half-extents.
    #[error("invalid boundary: center ({cx}, {cy}), half-extents ({hx}, {hy})")]
    InvalidBoundary {
        /// Center x
        cx: f64,
        /// Center y
        cy: f64,
        /// Half-width
        hx: f64,
        /// Half-height
        hy: f64,
    },

    /// The root would never be allowed to subdivide.
    #[error("depth limit must be at least 1")]
    ZeroDepthLimit,
}

/// Why a point was not stored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Error)]
pub enum InsertError {
    /// The point lies outside the tree's boundary.
    #[error("point lies outside the tree boundary")]
    OutOfBounds,

    /// The point is inside a subdivided node but none of its children accepted it.
    ///
    /// Children split their parent's edges at a shared coordinate, so this
    /// signals a broken partition rather than an expected outcome. Debug
    /// builds assert against it.
    #[error("point is inside the boundary but no quadrant accepted it")]
    Unplaced,
}
