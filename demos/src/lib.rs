//! Shared scenario for the highway demos.
//!
//! Generates hilly terrain with a river and a town, runs a highway across
//! it, then branches a side road from the town gate to the nearest point of
//! the highway.

use std::collections::HashMap;
use std::convert::Infallible;

use causeway_build::{
    BlockLog, BuildError, CommitStats, DriftWalker, HighwayBuilder, TerrainGen, TerrainGrid,
};
use causeway_core::{Area, Block, Direction, District, Point2, Point3, Terrain};
use causeway_paths::nearest_road;
use rand::SeedableRng;

pub const WIDTH: i32 = 96;
pub const DEPTH: i32 = 48;
const BASE_HEIGHT: i32 = 64;

/// Where the town sits.
pub const TOWN: Area = Area {
    min: Point2::new(60, 32),
    max: Point2::new(76, 44),
};

/// Column budget for finding the highway from the town gate.
const ROAD_SEARCH_CAP: usize = 4096;

/// Build the demo terrain for `seed`.
pub fn generate(seed: u64) -> TerrainGrid {
    let rng = rand::rngs::StdRng::seed_from_u64(seed);
    let grid = TerrainGrid::new(Area::new(0, 0, WIDTH, DEPTH), BASE_HEIGHT);
    let mut tg = TerrainGen::with_grid(grid, rng);

    let (lo, hi) = tg.rolling_hills(BASE_HEIGHT, 4, 24.0);
    let mut walker = DriftWalker::new(Direction::South);
    let wet = tg.random_walk_river(&mut walker, Point2::new(WIDTH / 3, 0), 1, 400);
    let trees = tg.scatter_obstructions(150);
    tg.grid.fill_district(
        TOWN,
        District {
            id: 1,
            is_urban: true,
        },
    );
    log::info!("terrain: heights {lo}..={hi}, {wet} water columns, {trees} trees");
    tg.grid
}

/// Result of a demo run.
pub struct Outcome {
    pub terrain: TerrainGrid,
    pub blocks: BlockLog,
    pub highway: CommitStats,
    pub branch: Option<CommitStats>,
}

/// Run the scenario for `seed`.
pub fn run(seed: u64) -> Result<Outcome, BuildError<Infallible>> {
    let terrain = generate(seed);
    let mut builder = HighwayBuilder::default();
    let mut blocks = BlockLog::new();

    let west = surface_point(&terrain, Point2::new(0, DEPTH / 4));
    let east = surface_point(&terrain, Point2::new(WIDTH - 4, DEPTH / 4));
    let highway = builder.connect(&terrain, &mut blocks, west, east)?;
    log::info!("highway took {} expansions", builder.expansions());

    let roads: HashMap<Point2, i32> = blocks
        .placements()
        .iter()
        .filter(|(_, b)| !b.is_air())
        .map(|(p, _)| (p.xz(), p.y + 1))
        .collect();
    let gate = Point2::new(TOWN.min.x + TOWN.width() / 2, TOWN.min.z - 2);
    let junction = nearest_road(
        gate,
        terrain.bounds(),
        |p| roads.contains_key(&p),
        ROAD_SEARCH_CAP,
    );
    let branch = match junction {
        Some(junction) => {
            let start = surface_point(&terrain, gate);
            let end = Point3::new(junction.x, roads[&junction], junction.z);
            Some(builder.connect(&terrain, &mut blocks, start, end)?)
        }
        None => {
            log::warn!("no highway within reach of the town gate at {gate}");
            None
        }
    };

    Ok(Outcome {
        terrain,
        blocks,
        highway,
        branch,
    })
}

fn surface_point(terrain: &TerrainGrid, p: Point2) -> Point3 {
    p.at_height(terrain.height_at(p))
}

/// Top-down ASCII view: `#` highway, `+` border, `~` water, `T` town, `^`
/// obstruction, and `.`, `,`, `'` for low, middle and high ground.
pub fn render(terrain: &TerrainGrid, blocks: &BlockLog) -> String {
    let mut surface: HashMap<Point2, &Block> = HashMap::new();
    for (p, b) in blocks.placements() {
        if !b.is_air() {
            surface.insert(p.xz(), b);
        }
    }

    let area = terrain.bounds();
    let mut out = String::with_capacity(area.len() + area.depth() as usize);
    for z in area.min.z..area.max.z {
        for x in area.min.x..area.max.x {
            let p = Point2::new(x, z);
            let c = match surface.get(&p).map(|b| b.id()) {
                Some("minecraft:coarse_dirt" | "minecraft:rooted_dirt") => '+',
                Some(_) => '#',
                None if terrain.is_water(p) => '~',
                None if terrain.is_urban(p) => 'T',
                None if terrain.obstruction_height(p) > terrain.height_at(p) => '^',
                None => match terrain.height_at(p) - BASE_HEIGHT {
                    h if h < -1 => '.',
                    h if h <= 1 => ',',
                    _ => '\'',
                },
            };
            out.push(c);
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scenario_is_reproducible() {
        let a = generate(7);
        let b = generate(7);
        assert_eq!(a, b);
    }

    #[test]
    fn render_has_one_row_per_z() {
        let terrain = generate(3);
        let map = render(&terrain, &BlockLog::new());
        assert_eq!(map.lines().count(), DEPTH as usize);
        assert!(map.lines().all(|l| l.chars().count() == WIDTH as usize));
        assert!(map.contains('T'));
    }
}
