// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use kurbo::{Point, Rect};

/// Axis-aligned bounding box stored as a center and half-extents.
///
/// Containment is closed on both axes: points on an edge are inside.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Aabb {
    /// Center x
    pub cx: f64,
    /// Center y
    pub cy: f64,
    /// Half of the width
    pub hx: f64,
    /// Half of the height
    pub hy: f64,
}

impl Aabb {
    /// Create a new AABB from its center and half-extents.
    pub const fn new(cx: f64, cy: f64, hx: f64, hy: f64) -> Self {
        Self { cx, cy, hx, hy }
    }

    /// The center point.
    pub const fn center(&self) -> Point {
        Point::new(self.cx, self.cy)
    }

    /// The half-extents as `(hx, hy)`.
    pub const fn half_extents(&self) -> (f64, f64) {
        (self.hx, self.hy)
    }

    /// Minimum x (left)
    #[inline]
    pub fn min_x(&self) -> f64 {
        self.cx - self.hx
    }

    /// Minimum y (top)
    #[inline]
    pub fn min_y(&self) -> f64 {
        self.cy - self.hy
    }

    /// Maximum x (right)
    #[inline]
    pub fn max_x(&self) -> f64 {
        self.cx + self.hx
    }

    /// Maximum y (bottom)
    #[inline]
    pub fn max_y(&self) -> f64 {
        self.cy + self.hy
    }

    /// The edges as `(min_x, min_y, max_x, max_y)`.
    pub fn edges(&self) -> (f64, f64, f64, f64) {
        (self.min_x(), self.min_y(), self.max_x(), self.max_y())
    }

    /// Full width.
    pub fn width(&self) -> f64 {
        2.0 * self.hx
    }

    /// Full height.
    pub fn height(&self) -> f64 {
        2.0 * self.hy
    }

    /// Whether this AABB contains the point. NaN coordinates are never contained.
    pub fn contains(&self, point: Point) -> bool {
        self.min_x() <= point.x
            && point.x <= self.max_x()
            && self.min_y() <= point.y
            && point.y <= self.max_y()
    }

    /// Whether the center is finite and both half-extents are finite and positive.
    pub fn is_valid(&self) -> bool {
        self.cx.is_finite()
            && self.cy.is_finite()
            && self.hx.is_finite()
            && self.hy.is_finite()
            && self.hx > 0.0
            && self.hy > 0.0
    }

    /// The boundary of one quadrant of this box.
    ///
    /// Half-extents are halved and the center moves by the new half-extents
    /// in the direction of the quadrant.
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        let hx = self.hx / 2.0;
        let hy = self.hy / 2.0;
        let (sx, sy) = quadrant.signs();
        Self::new(self.cx + sx * hx, self.cy + sy * hy, hx, hy)
    }

    /// Convert to a Kurbo rectangle spanning the same edges.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.min_x(), self.min_y(), self.max_x(), self.max_y())
    }
}

/// Closed containment against explicit edges.
#[inline]
pub(crate) fn region_contains(region: &Rect, point: Point) -> bool {
    region.x0 <= point.x
        && point.x <= region.x1
        && region.y0 <= point.y
        && point.y <= region.y1
}

/// The part of `region` on the `quadrant` side of `at`.
///
/// Neighbouring quadrants share the exact split coordinate, so the four parts
/// cover `region` with no gap whatever rounding went into `at`. An axis where
/// `at` is not strictly inside is left whole on both sides.
pub(crate) fn split_region(region: &Rect, at: Point, quadrant: Quadrant) -> Rect {
    let (west_x1, east_x0) = split_axis(region.x0, region.x1, at.x);
    let (north_y1, south_y0) = split_axis(region.y0, region.y1, at.y);
    match quadrant {
        Quadrant::NorthEast => Rect::new(east_x0, region.y0, region.x1, north_y1),
        Quadrant::NorthWest => Rect::new(region.x0, region.y0, west_x1, north_y1),
        Quadrant::SouthEast => Rect::new(east_x0, south_y0, region.x1, region.y1),
        Quadrant::SouthWest => Rect::new(region.x0, south_y0, west_x1, region.y1),
    }
}

/// End of the low half and start of the high half of `lo..=hi` split at `at`.
fn split_axis(lo: f64, hi: f64, at: f64) -> (f64, f64) {
    if lo < at && at < hi { (at, at) } else { (hi, lo) }
}

/// Whether splitting `region` at `at` shrinks it on at least one axis.
pub(crate) fn can_split(region: &Rect, at: Point) -> bool {
    (region.x0 < at.x && at.x < region.x1) || (region.y0 < at.y && at.y < region.y1)
}

impl From<Aabb> for Rect {
    fn from(aabb: Aabb) -> Self {
        aabb.to_rect()
    }
}

/// One of the four children of a subdivided node.
///
/// North is toward decreasing y, matching top-down screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quadrant {
    /// +x, -y
    NorthEast,
    /// -x, -y
    NorthWest,
    /// +x, +y
    SouthEast,
    /// -x, +y
    SouthWest,
}

impl Quadrant {
    /// All quadrants in insertion and traversal order.
    pub const ALL: [Self; 4] = [
        Self::NorthEast,
        Self::NorthWest,
        Self::SouthEast,
        Self::SouthWest,
    ];

    /// Position of this quadrant in [`Quadrant::ALL`].
    pub const fn index(self) -> usize {
        match self {
            Self::NorthEast => 0,
            Self::NorthWest => 1,
            Self::SouthEast => 2,
            Self::SouthWest => 3,
        }
    }

    /// Direction of the child center relative to the parent center.
    pub const fn signs(self) -> (f64, f64) {
        match self {
            Self::NorthEast => (1.0, -1.0),
            Self::NorthWest => (-1.0, -1.0),
            Self::SouthEast => (1.0, 1.0),
            Self::SouthWest => (-1.0, 1.0),
        }
    }
}
