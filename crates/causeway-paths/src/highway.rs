//! Neighbor policy and cost model for routing highways over terrain.

use causeway_core::{Direction, Point3, Terrain};

use crate::traits::{Pather, RoutePather};

/// Step sizes of the neighbor graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NeighborPolicy {
    /// Preferred axis-aligned jump.
    pub large_step: i32,
    /// Fallback jump, and the only one used on diagonals.
    pub small_step: i32,
    /// Largest elevation change allowed between neighbors.
    pub max_climb: i32,
}

impl Default for NeighborPolicy {
    fn default() -> Self {
        Self {
            large_step: 4,
            small_step: 2,
            max_climb: 2,
        }
    }
}

/// Weights of the traversal cost model.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostWeights {
    /// Multiplier on the start's distance to goal.
    pub seed: f64,
    /// Multiplier on the forward distance-to-goal estimate.
    pub heuristic: f64,
    /// Base cost of every step on dry land.
    pub step: f64,
    /// Base cost of a step ending on water.
    pub water_step: f64,
    /// Per unit of difference between a point and the terrain beneath it.
    pub height: f64,
    /// Flat penalty for entering an urban district.
    pub urban: f64,
    /// Flat penalty for passing close to a wall.
    pub near_wall: f64,
    /// Per unit of elevation change between consecutive points.
    pub slope: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            seed: 2.0,
            heuristic: 3.0,
            step: 2.0,
            water_step: 32.0,
            height: 5.0,
            urban: 50.0,
            near_wall: 10.0,
            slope: 2.0,
        }
    }
}

/// [`RoutePather`] over a [`Terrain`].
///
/// Cardinal directions try a long jump first, with the landing elevation
/// clamped to within `max_climb` of the current point; if the long jump
/// leaves the world a short jump is tried instead. Diagonals only ever take
/// the short jump and keep the exact terrain height, so they are dropped
/// when the climb is too steep.
pub struct HighwayPather<'a, T: Terrain + ?Sized> {
    terrain: &'a T,
    policy: NeighborPolicy,
    weights: CostWeights,
}

impl<'a, T: Terrain + ?Sized> HighwayPather<'a, T> {
    pub fn new(terrain: &'a T, policy: NeighborPolicy, weights: CostWeights) -> Self {
        Self {
            terrain,
            policy,
            weights,
        }
    }
}

impl<T: Terrain + ?Sized> Pather for HighwayPather<'_, T> {
    fn neighbors(&self, p: Point3, buf: &mut Vec<Point3>) {
        let climb = self.policy.max_climb;
        for dir in Direction::ALL {
            let offset = dir.offset();

            if dir.is_cardinal() {
                let far = p.step(offset * self.policy.large_step);
                if self.terrain.in_bounds(far.xz()) {
                    let ground = self.terrain.height_at(far.xz());
                    buf.push(far.with_y(ground.clamp(p.y - climb, p.y + climb)));
                    continue;
                }
            }

            let near = p.step(offset * self.policy.small_step);
            if !self.terrain.in_bounds(near.xz()) {
                continue;
            }
            let ground = self.terrain.height_at(near.xz());
            if (ground - p.y).abs() <= climb {
                buf.push(near.with_y(ground));
            }
        }
    }
}

impl<T: Terrain + ?Sized> RoutePather for HighwayPather<'_, T> {
    fn seed_cost(&self, start: Point3, goal: Point3) -> f64 {
        self.weights.seed * start.distance(goal)
    }

    fn extend_cost(&self, prev_total: f64, prev: Point3, next: Point3, goal: Point3) -> f64 {
        let w = &self.weights;
        let column = next.xz();

        let mut cost = prev_total - w.heuristic * prev.distance(goal);

        cost += if self.terrain.is_water(column) {
            w.water_step
        } else {
            w.step
        };
        cost += w.height * f64::from((next.y - self.terrain.height_at(column)).abs());
        if self.terrain.is_urban(column) {
            cost += w.urban;
        }
        if self.terrain.near_wall(column) {
            cost += w.near_wall;
        }
        cost += w.slope * f64::from((next.y - prev.y).abs());
        cost += prev.distance(next);

        cost + w.heuristic * next.distance(goal)
    }
}
