//! The horizontal footprint of a highway: the path itself, the shoulder ring
//! around it and an optional outer border ring.

use std::collections::BTreeMap;

use causeway_core::{Point2, Point3, Terrain};
use causeway_paths::Neighbors;

/// Footprint layers, each mapping a column to its target elevation.
///
/// The three layers never share a column.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FootprintSets {
    #[cfg_attr(feature = "serde", serde(with = "columns"))]
    pub core: BTreeMap<Point2, i32>,
    #[cfg_attr(feature = "serde", serde(with = "columns"))]
    pub shoulder: BTreeMap<Point2, i32>,
    #[cfg_attr(feature = "serde", serde(with = "columns"))]
    pub border: BTreeMap<Point2, i32>,
}

/// Column maps travel as `[point, elevation]` pairs, since JSON object keys
/// must be strings.
#[cfg(feature = "serde")]
mod columns {
    use std::collections::BTreeMap;

    use causeway_core::Point2;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(map: &BTreeMap<Point2, i32>, s: S) -> Result<S::Ok, S::Error> {
        s.collect_seq(map)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BTreeMap<Point2, i32>, D::Error> {
        Vec::<(Point2, i32)>::deserialize(d).map(|v| v.into_iter().collect())
    }
}

impl FootprintSets {
    /// Expand a dense path into its footprint.
    ///
    /// Every path column joins the core at the path's elevation; when a
    /// column is visited twice the later point wins. The in-bounds 8-way
    /// neighbors of core columns form the shoulder, which inherits the
    /// elevation of the path point it was reached from rather than the
    /// terrain height. With `want_border`, the in-bounds cardinal neighbors
    /// of the shoulder form the border and inherit the shoulder's elevation.
    pub fn expand<T: Terrain + ?Sized>(path: &[Point3], terrain: &T, want_border: bool) -> Self {
        let mut sets = Self::default();
        for p in path {
            sets.core.insert(p.xz(), p.y);
        }

        let mut nb = Neighbors::new();
        let in_bounds = |q: Point2| terrain.in_bounds(q);

        for p in path {
            for &q in nb.all(p.xz(), in_bounds) {
                if sets.core.contains_key(&q) || sets.shoulder.contains_key(&q) {
                    continue;
                }
                sets.shoulder.insert(q, p.y);
            }
        }

        if want_border {
            for (&p, &y) in &sets.shoulder {
                for &q in nb.cardinal(p, in_bounds) {
                    if sets.core.contains_key(&q)
                        || sets.shoulder.contains_key(&q)
                        || sets.border.contains_key(&q)
                    {
                        continue;
                    }
                    sets.border.insert(q, y);
                }
            }
        }

        sets
    }

    /// Core and shoulder together, the area surfaced with the main palette.
    pub fn main_elevations(&self) -> BTreeMap<Point2, i32> {
        let mut merged = self.core.clone();
        merged.extend(self.shoulder.iter().map(|(&p, &y)| (p, y)));
        merged
    }

    /// Target elevation of `p` in whichever layer holds it.
    pub fn elevation(&self, p: Point2) -> Option<i32> {
        self.core
            .get(&p)
            .or_else(|| self.shoulder.get(&p))
            .or_else(|| self.border.get(&p))
            .copied()
    }

    /// Number of columns over all layers.
    pub fn len(&self) -> usize {
        self.core.len() + self.shoulder.len() + self.border.len()
    }

    pub fn is_empty(&self) -> bool {
        self.core.is_empty()
    }
}
