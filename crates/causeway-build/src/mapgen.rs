//! Synthetic terrain for tests and demos.
//!
//! Provides rolling hills from seeded Perlin noise, meandering rivers
//! carved by a random walk, and scattered obstructions standing in for
//! trees.

use causeway_core::{Direction, Point2, Terrain};
use ::noise::{NoiseFn, Perlin};
use rand::{Rng, RngExt};

use crate::grid::TerrainGrid;

/// Chooses the next column of a random walk.
pub trait RandomWalker {
    /// Given the current column `p`, return the next one using `rng`.
    fn step(&mut self, p: Point2, rng: &mut impl Rng) -> Point2;
}

/// Walks mostly straight ahead, veering 45° to either side now and then.
#[derive(Debug, Clone, Copy)]
pub struct DriftWalker {
    pub heading: Direction,
    /// Chance in percent of veering on each step.
    pub drift: u32,
}

impl DriftWalker {
    pub fn new(heading: Direction) -> Self {
        Self { heading, drift: 25 }
    }
}

impl RandomWalker for DriftWalker {
    fn step(&mut self, p: Point2, rng: &mut impl Rng) -> Point2 {
        let roll = rng.random_range(0..100);
        let dir = if roll < self.drift / 2 {
            self.heading.rotate_left()
        } else if roll < self.drift {
            self.heading.rotate_right()
        } else {
            self.heading
        };
        p + dir.offset()
    }
}

/// Terrain generator operating on a [`TerrainGrid`].
pub struct TerrainGen<R: Rng> {
    pub rng: R,
    pub grid: TerrainGrid,
}

impl<R: Rng> TerrainGen<R> {
    pub fn with_grid(grid: TerrainGrid, rng: R) -> Self {
        Self { rng, grid }
    }

    /// Raise hills of up to `amplitude` above and below `base`, with
    /// features roughly `cell` columns across. The Perlin field is seeded
    /// from the generator's rng, so different seeds give different hills.
    ///
    /// Returns the lowest and highest resulting heights.
    pub fn rolling_hills(&mut self, base: i32, amplitude: i32, cell: f64) -> (i32, i32) {
        let perlin = Perlin::new(self.rng.random());
        let freq = 1.0 / cell.max(1.0);
        let mut lo = i32::MAX;
        let mut hi = i32::MIN;
        for p in self.grid.bounds() {
            let (x, z) = (f64::from(p.x) * freq, f64::from(p.z) * freq);
            // Two octaves, persistence 0.5.
            let v = (perlin.get([x, z]) + 0.5 * perlin.get([x * 2.0, z * 2.0])) / 1.5;
            let h = base + (v.clamp(-1.0, 1.0) * f64::from(amplitude)).round() as i32;
            self.grid.set_height(p, h);
            lo = lo.min(h);
            hi = hi.max(h);
        }
        (lo, hi)
    }

    /// Carve a river from `start`, following `walker` until it leaves the
    /// grid or `max_steps` is reached. Banks reach `half_width` columns out
    /// on either side, and wet columns sink one below their old height.
    ///
    /// Returns the number of columns turned into water.
    pub fn random_walk_river(
        &mut self,
        walker: &mut impl RandomWalker,
        start: Point2,
        half_width: i32,
        max_steps: usize,
    ) -> usize {
        let bounds = self.grid.bounds();
        let mut carved = 0;
        let mut pos = start;

        for _ in 0..max_steps {
            if !bounds.contains(pos) {
                break;
            }
            for dz in -half_width..=half_width {
                for dx in -half_width..=half_width {
                    let q = pos.shift(dx, dz);
                    if self.grid.in_bounds(q) && !self.grid.is_water(q) {
                        let h = self.grid.height_at(q);
                        self.grid.set_water(q, true);
                        self.grid.set_height(q, h - 1);
                        carved += 1;
                    }
                }
            }
            pos = walker.step(pos, &mut self.rng);
        }

        carved
    }

    /// Scatter `count` obstructions rising 3 to 7 blocks above the ground
    /// on random dry columns.
    pub fn scatter_obstructions(&mut self, count: usize) -> usize {
        let area = self.grid.bounds();
        if area.is_empty() {
            return 0;
        }
        let mut placed = 0;
        for _ in 0..count {
            let p = Point2::new(
                self.rng.random_range(area.min.x..area.max.x),
                self.rng.random_range(area.min.z..area.max.z),
            );
            if self.grid.is_water(p) {
                continue;
            }
            let h = self.grid.height_at(p) + self.rng.random_range(3..8);
            self.grid.set_obstruction(p, Some(h));
            placed += 1;
        }
        placed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use causeway_core::Area;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn generator(seed: u64) -> TerrainGen<StdRng> {
        TerrainGen::with_grid(
            TerrainGrid::new(Area::new(0, 0, 64, 64), 64),
            StdRng::seed_from_u64(seed),
        )
    }

    #[test]
    fn hills_stay_within_amplitude() {
        let mut g = generator(1);
        let (lo, hi) = g.rolling_hills(64, 6, 16.0);
        assert!(lo >= 58 && hi <= 70);
        assert!(lo < hi);
        for p in g.grid.bounds() {
            let h = g.grid.height_at(p);
            assert!((lo..=hi).contains(&h));
        }
    }

    #[test]
    fn same_seed_same_terrain() {
        let mut a = generator(9);
        let mut b = generator(9);
        a.rolling_hills(64, 6, 16.0);
        b.rolling_hills(64, 6, 16.0);
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = generator(9);
        let mut b = generator(10);
        a.rolling_hills(64, 6, 16.0);
        b.rolling_hills(64, 6, 16.0);
        assert_ne!(a.grid, b.grid);
    }

    #[test]
    fn river_carves_water() {
        let mut g = generator(3);
        let mut walker = DriftWalker::new(Direction::South);
        let carved = g.random_walk_river(&mut walker, Point2::new(32, 0), 1, 200);
        assert!(carved > 0);
        let wet = g.grid.bounds().iter().filter(|&p| g.grid.is_water(p)).count();
        assert_eq!(wet, carved);
        assert!(g.grid.is_water(Point2::new(32, 0)));
        assert_eq!(g.grid.height_at(Point2::new(32, 0)), 63);
    }

    #[test]
    fn straight_walker_never_drifts() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut walker = DriftWalker {
            heading: Direction::East,
            drift: 0,
        };
        let mut p = Point2::ZERO;
        for _ in 0..10 {
            p = walker.step(p, &mut rng);
        }
        assert_eq!(p, Point2::new(10, 0));
    }

    #[test]
    fn obstructions_rise_above_ground() {
        let mut g = generator(4);
        let placed = g.scatter_obstructions(40);
        assert!(placed > 0);
        let raised = g
            .grid
            .bounds()
            .iter()
            .filter(|&p| g.grid.obstruction_height(p) > g.grid.height_at(p))
            .count();
        assert!(raised > 0 && raised <= placed);
    }
}
