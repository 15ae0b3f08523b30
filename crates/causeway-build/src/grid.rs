//! In-memory terrain and block sinks, for tests and offline runs.

use std::collections::BTreeMap;
use std::convert::Infallible;

use causeway_core::{Area, Block, District, Placer, Point2, Point3, Terrain};

/// Per-column terrain over a rectangular [`Area`].
///
/// Columns outside the area read as height 0, dry and district-free.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TerrainGrid {
    area: Area,
    heights: Vec<i32>,
    water: Vec<bool>,
    districts: Vec<Option<District>>,
    walls: Vec<bool>,
    obstructions: Vec<Option<i32>>,
}

impl TerrainGrid {
    /// A flat, dry grid at `height`.
    pub fn new(area: Area, height: i32) -> Self {
        let n = area.len();
        Self {
            area,
            heights: vec![height; n],
            water: vec![false; n],
            districts: vec![None; n],
            walls: vec![false; n],
            obstructions: vec![None; n],
        }
    }

    pub fn area(&self) -> Area {
        self.area
    }

    /// Set the surface height at `p`. Returns `false` out of bounds.
    pub fn set_height(&mut self, p: Point2, height: i32) -> bool {
        self.set(p, |g, i| g.heights[i] = height)
    }

    pub fn set_water(&mut self, p: Point2, water: bool) -> bool {
        self.set(p, |g, i| g.water[i] = water)
    }

    pub fn set_district(&mut self, p: Point2, district: Option<District>) -> bool {
        self.set(p, |g, i| g.districts[i] = district)
    }

    pub fn set_near_wall(&mut self, p: Point2, near: bool) -> bool {
        self.set(p, |g, i| g.walls[i] = near)
    }

    /// Override the obstruction height at `p`; by default it equals the
    /// surface height.
    pub fn set_obstruction(&mut self, p: Point2, height: Option<i32>) -> bool {
        self.set(p, |g, i| g.obstructions[i] = height)
    }

    /// Mark every column of `area` inside the grid as water.
    pub fn fill_water(&mut self, area: Area) {
        for p in area.intersect(self.area) {
            self.set_water(p, true);
        }
    }

    /// Apply `district` to every column of `area` inside the grid.
    pub fn fill_district(&mut self, area: Area, district: District) {
        for p in area.intersect(self.area) {
            self.set_district(p, Some(district));
        }
    }

    fn set(&mut self, p: Point2, f: impl FnOnce(&mut Self, usize)) -> bool {
        match self.area.index(p) {
            Some(i) => {
                f(self, i);
                true
            }
            None => false,
        }
    }

    fn get<V: Copy>(&self, p: Point2, column: &[V], default: V) -> V {
        self.area
            .index(p)
            .and_then(|i| column.get(i).copied())
            .unwrap_or(default)
    }
}

impl Terrain for TerrainGrid {
    fn bounds(&self) -> Area {
        self.area
    }

    fn height_at(&self, p: Point2) -> i32 {
        self.get(p, &self.heights, 0)
    }

    fn is_water(&self, p: Point2) -> bool {
        self.get(p, &self.water, false)
    }

    fn district_at(&self, p: Point2) -> Option<District> {
        self.get(p, &self.districts, None)
    }

    fn near_wall(&self, p: Point2) -> bool {
        self.get(p, &self.walls, false)
    }

    fn obstruction_height(&self, p: Point2) -> i32 {
        self.get(p, &self.obstructions, None)
            .unwrap_or_else(|| self.height_at(p))
    }
}

/// A [`Placer`] that records every placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockLog {
    placed: Vec<(Point3, Block)>,
    latest: BTreeMap<Point3, usize>,
}

impl BlockLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Placements in the order they were made.
    pub fn placements(&self) -> &[(Point3, Block)] {
        &self.placed
    }

    /// The block most recently placed at `p`.
    pub fn block_at(&self, p: Point3) -> Option<&Block> {
        self.latest.get(&p).map(|&i| &self.placed[i].1)
    }

    pub fn len(&self) -> usize {
        self.placed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placed.is_empty()
    }
}

impl Placer for BlockLog {
    type Error = Infallible;

    fn place_block(&mut self, p: Point3, block: &Block) -> Result<(), Infallible> {
        self.latest.insert(p, self.placed.len());
        self.placed.push((p, block.clone()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_queries_and_defaults() {
        let mut g = TerrainGrid::new(Area::new(0, 0, 8, 4), 64);
        let p = Point2::new(3, 2);
        assert!(g.set_height(p, 70));
        assert!(g.set_water(p, true));
        assert!(g.set_near_wall(p, true));
        assert!(!g.set_height(Point2::new(8, 0), 1));

        assert_eq!(g.height_at(p), 70);
        assert!(g.is_water(p));
        assert!(g.near_wall(p));
        assert_eq!(g.obstruction_height(p), 70);
        assert_eq!(g.height_at(Point2::new(0, 0)), 64);
        assert_eq!(g.height_at(Point2::new(-1, 0)), 0);
        assert!(!g.in_bounds(Point2::new(0, 4)));

        g.set_obstruction(p, Some(80));
        assert_eq!(g.obstruction_height(p), 80);
    }

    #[test]
    fn districts_fill_clipped() {
        let mut g = TerrainGrid::new(Area::new(0, 0, 8, 8), 64);
        let town = District {
            id: 3,
            is_urban: true,
        };
        g.fill_district(Area::new(6, 6, 12, 12), town);
        assert!(g.is_urban(Point2::new(7, 7)));
        assert!(!g.is_urban(Point2::new(5, 7)));
        assert_eq!(g.district_at(Point2::new(6, 6)), Some(town));
    }

    #[test]
    fn water_fill_clipped() {
        let mut g = TerrainGrid::new(Area::new(0, 0, 8, 8), 64);
        g.fill_water(Area::new(6, -2, 12, 2));
        assert!(g.is_water(Point2::new(7, 0)));
        assert!(!g.is_water(Point2::new(7, 2)));
        assert!(!g.is_water(Point2::new(5, 0)));
    }

    #[test]
    fn block_log_tracks_latest() {
        let mut log = BlockLog::new();
        let p = Point3::new(1, 63, 1);
        log.place_block(p, &Block::new("minecraft:stone")).unwrap();
        log.clear_air(p).unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.block_at(p), Some(&Block::AIR));
        assert_eq!(log.block_at(Point3::new(0, 0, 0)), None);
        assert_eq!(log.placements()[0].1, Block::new("minecraft:stone"));
    }
}
