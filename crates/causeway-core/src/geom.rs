//! Geometry primitives: [`Point2`], [`Point3`] and [`Area`].
//!
//! The world is laid out with `y` as the vertical axis. Horizontal
//! footprints and terrain lookups use the `(x, z)` projection.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Sub};

// ---------------------------------------------------------------------------
// Point2
// ---------------------------------------------------------------------------

/// A horizontal integer coordinate `(x, z)`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2 {
    pub x: i32,
    pub z: i32,
}

impl Point2 {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, z: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Return a point shifted by (dx, dz).
    #[inline]
    pub const fn shift(self, dx: i32, dz: i32) -> Self {
        Self {
            x: self.x + dx,
            z: self.z + dz,
        }
    }

    /// Lift the point to 3D at elevation `y`.
    #[inline]
    pub const fn at_height(self, y: i32) -> Point3 {
        Point3::new(self.x, y, self.z)
    }

    /// The four cardinal neighbours (north, east, south, west).
    #[inline]
    pub fn neighbors_4(self) -> [Point2; 4] {
        [
            Self::new(self.x, self.z - 1),
            Self::new(self.x + 1, self.z),
            Self::new(self.x, self.z + 1),
            Self::new(self.x - 1, self.z),
        ]
    }

    /// All eight neighbours, clockwise from north.
    #[inline]
    pub fn neighbors_8(self) -> [Point2; 8] {
        [
            Self::new(self.x, self.z - 1),
            Self::new(self.x + 1, self.z - 1),
            Self::new(self.x + 1, self.z),
            Self::new(self.x + 1, self.z + 1),
            Self::new(self.x, self.z + 1),
            Self::new(self.x - 1, self.z + 1),
            Self::new(self.x - 1, self.z),
            Self::new(self.x - 1, self.z - 1),
        ]
    }
}

impl PartialOrd for Point2 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Point2 {
    /// Row-major: `z` first, then `x`.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.z.cmp(&other.z).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.z)
    }
}

impl Add for Point2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for Point2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl Mul<i32> for Point2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.z * rhs)
    }
}

// ---------------------------------------------------------------------------
// Point3
// ---------------------------------------------------------------------------

/// An integer world coordinate. `y` is elevation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Horizontal projection.
    #[inline]
    pub const fn xz(self) -> Point2 {
        Point2::new(self.x, self.z)
    }

    /// Same column, different elevation.
    #[inline]
    pub const fn with_y(self, y: i32) -> Self {
        Self::new(self.x, y, self.z)
    }

    /// Move horizontally by `offset`, keeping the elevation.
    #[inline]
    pub const fn step(self, offset: Point2) -> Self {
        Self::new(self.x + offset.x, self.y, self.z + offset.z)
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point3) -> f64 {
        let dx = f64::from(self.x - other.x);
        let dy = f64::from(self.y - other.y);
        let dz = f64::from(self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl Ord for Point3 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.xz()
            .cmp(&other.xz())
            .then(self.y.cmp(&other.y))
    }
}

impl PartialOrd for Point3 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl Add for Point3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for Point3 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: i32) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Div<i32> for Point3 {
    type Output = Self;
    /// Component-wise division, truncating toward zero.
    #[inline]
    fn div(self, rhs: i32) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

// ---------------------------------------------------------------------------
// Area
// ---------------------------------------------------------------------------

/// A half-open horizontal rectangle \[min, max). `min` is inclusive, `max`
/// is exclusive.
///
/// All empty areas are considered equal.
#[derive(Copy, Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Area {
    pub min: Point2,
    pub max: Point2,
}

impl PartialEq for Area {
    fn eq(&self, other: &Self) -> bool {
        (self.min == other.min && self.max == other.max) || (self.is_empty() && other.is_empty())
    }
}

impl Eq for Area {}

impl Hash for Area {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_empty() {
            // All empty areas hash the same.
            Point2::ZERO.hash(state);
            Point2::ZERO.hash(state);
        } else {
            self.min.hash(state);
            self.max.hash(state);
        }
    }
}

impl Area {
    /// Create a new area from two corners, canonicalized so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: i32, z0: i32, x1: i32, z1: i32) -> Self {
        Self {
            min: Point2::new(x0.min(x1), z0.min(z1)),
            max: Point2::new(x0.max(x1), z0.max(z1)),
        }
    }

    /// Extent along `x`.
    #[inline]
    pub fn width(self) -> i32 {
        self.max.x - self.min.x
    }

    /// Extent along `z`.
    #[inline]
    pub fn depth(self) -> i32 {
        self.max.z - self.min.z
    }

    /// Total number of columns in the area.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        (self.width() as usize) * (self.depth() as usize)
    }

    /// Whether the area has zero or negative extent.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.z >= self.max.z
    }

    /// Whether `p` is inside the half-open area.
    #[inline]
    pub fn contains(self, p: Point2) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.z >= self.min.z && p.z < self.max.z
    }

    /// Intersection of two areas (may be empty).
    #[inline]
    pub fn intersect(self, other: Area) -> Self {
        let r = Self {
            min: Point2::new(self.min.x.max(other.min.x), self.min.z.max(other.min.z)),
            max: Point2::new(self.max.x.min(other.max.x), self.max.z.min(other.max.z)),
        };
        if r.is_empty() { Self::default() } else { r }
    }

    /// Flat row-major index of `p`, or `None` outside the area.
    #[inline]
    pub fn index(self, p: Point2) -> Option<usize> {
        if !self.contains(p) {
            return None;
        }
        let x = (p.x - self.min.x) as usize;
        let z = (p.z - self.min.z) as usize;
        Some(z * self.width() as usize + x)
    }

    /// Row-major iterator over every column in the area.
    #[inline]
    pub fn iter(self) -> AreaIter {
        AreaIter {
            area: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Area {
    type Item = Point2;
    type IntoIter = AreaIter;
    #[inline]
    fn into_iter(self) -> AreaIter {
        self.iter()
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

/// Row-major iterator over the columns of an [`Area`].
#[derive(Clone, Debug)]
pub struct AreaIter {
    area: Area,
    cur: Point2,
}

impl Iterator for AreaIter {
    type Item = Point2;

    #[inline]
    fn next(&mut self) -> Option<Point2> {
        if self.cur.z >= self.area.max.z || self.area.is_empty() {
            return None;
        }
        let p = self.cur;
        self.cur.x += 1;
        if self.cur.x >= self.area.max.x {
            self.cur.x = self.area.min.x;
            self.cur.z += 1;
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.area.is_empty() || self.cur.z >= self.area.max.z {
            return (0, Some(0));
        }
        let w = self.area.width() as usize;
        let remaining_in_row = (self.area.max.x - self.cur.x) as usize;
        let remaining_rows = (self.area.max.z - self.cur.z - 1) as usize;
        let total = remaining_in_row + remaining_rows * w;
        (total, Some(total))
    }
}

impl ExactSizeIterator for AreaIter {}
