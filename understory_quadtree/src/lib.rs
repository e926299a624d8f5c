// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_quadtree --heading-base-level=0

//! Understory Quadtree: a point-region (PR) quadtree over Kurbo points.
//!
//! A [`Quadtree`] covers a fixed [`Aabb`] and stores points in leaves holding at most
//! `capacity` points each. The first insertion into a full leaf splits it into four
//! quadrants and moves its points into them.
//!
//! - Insert points one at a time; points outside the boundary are rejected, duplicates are kept.
//! - Walk the tree for every node boundary, every stored point, and the deepest leaf.
//! - Read per-node state through [`NodeRef`], starting at [`Quadtree::root`].
//!
//! There is no removal, rebalancing, or range query: a tree is built once per
//! configuration and discarded when the configuration or the point set changes.
//!
//! # Example
//!
//! ```rust
//! use understory_quadtree::{Aabb, Point, Quadtree};
//!
//! // A 400×400 region centered on the origin, splitting leaves past 3 points.
//! let mut qt = Quadtree::new(Aabb::new(0.0, 0.0, 200.0, 200.0), 3).unwrap();
//! for (x, y) in [(10.0, 10.0), (15.0, 15.0), (10.0, 20.0), (18.0, 18.0)] {
//!     assert!(qt.insert(Point::new(x, y)));
//! }
//! assert!(!qt.insert(Point::new(250.0, 0.0)));
//!
//! assert_eq!(qt.points().len(), 4);
//! assert!(qt.max_depth() >= 1);
//! assert!(qt.boundaries().len() > 1);
//! ```
//!
//! ## Quadrants
//!
//! Children are visited NE, NW, SE, SW. North is toward decreasing y, as in screen
//! coordinates, so NE is the `(+x, -y)` quadrant. A point on a shared edge belongs to
//! the first quadrant in that order that contains it.
//!
//! ## Configuration
//!
//! [`Config`] holds the boundary, capacity, and an optional depth limit. Capacity 0 and
//! boundaries with non-positive half-extents are rejected with [`ConfigError`]. Leaves
//! split until halving no longer shrinks them, so distinct points are always separated
//! and coincident ones end up sharing one leaf. A depth limit stops splitting earlier.
//!
//! ## Features
//!
//! - `std` (default): forwards to Kurbo and `thiserror`.
//! - `libm`: Kurbo math without `std`.
//! - `tracing`: trace subdivisions and warn on points no quadrant accepted.

#![no_std]

extern crate alloc;

pub mod config;
pub mod error;
pub mod node;
pub mod stats;
pub mod tree;
pub mod types;

pub use config::Config;
pub use error::{ConfigError, InsertError};
pub use kurbo::Point;
pub use node::NodeRef;
pub use stats::Stats;
pub use tree::Quadtree;
pub use types::{Aabb, Quadrant};
