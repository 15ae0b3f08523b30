//! Writing a planned highway into the world.

use std::collections::BTreeMap;

use causeway_core::{Placer, Point2, Terrain};
use causeway_paths::Path;

use crate::footprint::FootprintSets;
use crate::palette::Surface;

/// Everything needed to place a highway, computed without touching the
/// world.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    /// The dense path.
    pub path: Path,
    pub footprint: FootprintSets,
    /// Chosen surface of every footprint column.
    pub surfaces: BTreeMap<Point2, Surface>,
    /// Points of `path` that stand on water.
    pub wet: usize,
}

impl Plan {
    /// Columns where the footprint rises one unit along a cardinal
    /// direction.
    pub fn slopes(&self) -> impl Iterator<Item = (Point2, &Surface)> {
        self.surfaces
            .iter()
            .filter(|(_, s)| s.rise.is_some())
            .map(|(&p, s)| (p, s))
    }
}

/// Counters reported by [`commit`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommitStats {
    /// Surface blocks placed.
    pub placed: usize,
    /// Columns whose headroom was cleared.
    pub cleared: usize,
    /// Columns left alone because they are urban.
    pub skipped_urban: usize,
    /// Surface blocks placed over water.
    pub wet: usize,
}

/// Place the surfaces of `plan`.
///
/// Core and shoulder go first, then the border. Each column's block sits
/// one below its target elevation; urban columns are skipped, and a column
/// obstructed above its target elevation first gets `clearance` blocks of
/// air above the surface. Bare ground reports an obstruction height equal
/// to its own height, so a column whose target elevation is the ground
/// height is never cleared.
pub fn commit<T, P>(
    terrain: &T,
    placer: &mut P,
    plan: &Plan,
    clearance: i32,
) -> Result<CommitStats, P::Error>
where
    T: Terrain + ?Sized,
    P: Placer + ?Sized,
{
    let mut stats = CommitStats::default();
    let main = plan.footprint.main_elevations();

    for (&p, &elevation) in main.iter().chain(&plan.footprint.border) {
        if terrain.is_urban(p) {
            stats.skipped_urban += 1;
            continue;
        }
        let Some(surface) = plan.surfaces.get(&p) else {
            log::debug!("no surface planned for {p}, skipping");
            continue;
        };

        let y = elevation - 1;
        if terrain.obstruction_height(p) > elevation {
            for dy in 1..=clearance {
                placer.clear_air(p.at_height(y + dy))?;
            }
            stats.cleared += 1;
        }
        placer.place_block(p.at_height(y), &surface.block)?;
        stats.placed += 1;
        if terrain.is_water(p) {
            stats.wet += 1;
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{BlockLog, TerrainGrid};
    use causeway_core::{Area, Block, District, Point3};

    fn surface(id: &'static str) -> Surface {
        Surface {
            block: Block::new(id),
            rise: None,
        }
    }

    fn plan_for(columns: &[(i32, i32, i32)], border: &[(i32, i32, i32)]) -> Plan {
        let mut plan = Plan::default();
        for &(x, z, y) in columns {
            plan.footprint.core.insert(Point2::new(x, z), y);
            plan.surfaces.insert(Point2::new(x, z), surface("minecraft:dirt_path"));
        }
        for &(x, z, y) in border {
            plan.footprint.border.insert(Point2::new(x, z), y);
            plan.surfaces.insert(Point2::new(x, z), surface("minecraft:coarse_dirt"));
        }
        plan
    }

    #[test]
    fn surface_goes_one_below_the_target() {
        let g = TerrainGrid::new(Area::new(0, 0, 8, 8), 64);
        let plan = plan_for(&[(1, 1, 64), (2, 1, 65)], &[(1, 3, 64)]);
        let mut log = BlockLog::new();
        let stats = commit(&g, &mut log, &plan, 6).unwrap();

        assert_eq!(stats.placed, 3);
        assert_eq!(stats.cleared, 0);
        assert_eq!(
            log.block_at(Point3::new(1, 63, 1)),
            Some(&Block::new("minecraft:dirt_path"))
        );
        assert_eq!(
            log.block_at(Point3::new(2, 64, 1)),
            Some(&Block::new("minecraft:dirt_path"))
        );
        // Border comes last.
        assert_eq!(log.placements().last().map(|(p, _)| *p), Some(Point3::new(1, 63, 3)));
    }

    #[test]
    fn urban_columns_are_skipped() {
        let mut g = TerrainGrid::new(Area::new(0, 0, 8, 8), 64);
        g.set_district(
            Point2::new(1, 1),
            Some(District {
                id: 1,
                is_urban: true,
            }),
        );
        let plan = plan_for(&[(1, 1, 64), (2, 1, 64)], &[]);
        let mut log = BlockLog::new();
        let stats = commit(&g, &mut log, &plan, 6).unwrap();
        assert_eq!(stats.skipped_urban, 1);
        assert_eq!(stats.placed, 1);
        assert_eq!(log.block_at(Point3::new(1, 63, 1)), None);
    }

    #[test]
    fn obstructed_columns_get_headroom() {
        let mut g = TerrainGrid::new(Area::new(0, 0, 8, 8), 64);
        g.set_obstruction(Point2::new(1, 1), Some(70));
        let plan = plan_for(&[(1, 1, 64)], &[]);
        let mut log = BlockLog::new();
        let stats = commit(&g, &mut log, &plan, 6).unwrap();

        assert_eq!(stats.cleared, 1);
        assert_eq!(log.len(), 7);
        for y in 64..=69 {
            assert_eq!(log.block_at(Point3::new(1, y, 1)), Some(&Block::AIR));
        }
        assert_eq!(log.block_at(Point3::new(1, 70, 1)), None);
        // Air first, then the surface.
        assert_eq!(log.placements()[6].0, Point3::new(1, 63, 1));
    }

    #[test]
    fn bare_ground_is_never_cleared() {
        let mut g = TerrainGrid::new(Area::new(0, 0, 8, 8), 64);
        g.set_obstruction(Point2::new(2, 1), Some(65));
        let plan = plan_for(&[(1, 1, 64), (2, 1, 64)], &[]);
        let mut log = BlockLog::new();
        let stats = commit(&g, &mut log, &plan, 6).unwrap();

        // (1, 1) is bare ground at the target height; (2, 1) has one block on top.
        assert_eq!(stats.cleared, 1);
        assert_eq!(log.block_at(Point3::new(1, 64, 1)), None);
        assert_eq!(log.block_at(Point3::new(2, 64, 1)), Some(&Block::AIR));
    }

    #[test]
    fn blocks_over_water_are_counted() {
        let mut g = TerrainGrid::new(Area::new(0, 0, 8, 8), 64);
        g.set_water(Point2::new(2, 1), true);
        g.set_water(Point2::new(2, 3), true);
        let plan = plan_for(&[(1, 1, 64), (2, 1, 64)], &[(2, 3, 64)]);
        let mut log = BlockLog::new();
        let stats = commit(&g, &mut log, &plan, 6).unwrap();
        assert_eq!(stats.placed, 3);
        assert_eq!(stats.wet, 2);
    }

    #[test]
    fn placer_errors_propagate() {
        struct Refuse;
        impl Placer for Refuse {
            type Error = String;
            fn place_block(&mut self, p: Point3, _block: &Block) -> Result<(), String> {
                Err(format!("refused {p}"))
            }
        }
        let g = TerrainGrid::new(Area::new(0, 0, 8, 8), 64);
        let plan = plan_for(&[(1, 1, 64)], &[]);
        let err = commit(&g, &mut Refuse, &plan, 6).unwrap_err();
        assert_eq!(err, "refused (1, 63, 1)");
    }

    #[test]
    fn slopes_lists_rising_columns() {
        let mut plan = plan_for(&[(1, 1, 64)], &[]);
        plan.surfaces.insert(
            Point2::new(2, 1),
            Surface {
                block: Block::new("minecraft:dirt_path"),
                rise: Some(causeway_core::Direction::East),
            },
        );
        let slopes: Vec<Point2> = plan.slopes().map(|(p, _)| p).collect();
        assert_eq!(slopes, vec![Point2::new(2, 1)]);
    }
}
