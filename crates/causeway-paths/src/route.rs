//! Start-to-end routing with a one-level midpoint fallback.

use std::fmt;

use causeway_core::{Point3, Terrain};

use crate::Router;
use crate::highway::HighwayPather;
use crate::router::{Path, Search};

/// Spacing of the lattice that route endpoints are aligned to.
pub const LATTICE: i32 = 4;

/// Why a route could not be produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// The start lies outside the world.
    StartOutOfBounds(Point3),
    /// The (aligned) end lies outside the world.
    EndOutOfBounds(Point3),
    /// Neither the direct search nor the split search reached the end.
    NoRoute { start: Point3, end: Point3 },
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StartOutOfBounds(p) => write!(f, "route start {p} is out of bounds"),
            Self::EndOutOfBounds(p) => write!(f, "route end {p} is out of bounds"),
            Self::NoRoute { start, end } => write!(f, "no route from {start} to {end}"),
        }
    }
}

impl std::error::Error for RouteError {}

/// Align `p` to the lattice phase of `anchor` and drop it onto the terrain.
///
/// `x` and `z` keep their block of [`LATTICE`] but take `anchor`'s residue;
/// `y` becomes the terrain height there.
pub fn align_to<T: Terrain + ?Sized>(terrain: &T, anchor: Point3, p: Point3) -> Point3 {
    let x = p.x - p.x.rem_euclid(LATTICE) + anchor.x.rem_euclid(LATTICE);
    let z = p.z - p.z.rem_euclid(LATTICE) + anchor.z.rem_euclid(LATTICE);
    let mut aligned = Point3::new(x, p.y, z);
    if terrain.in_bounds(aligned.xz()) {
        aligned.y = terrain.height_at(aligned.xz());
    }
    aligned
}

impl Router {
    /// Route from `start` to `end` over `terrain`.
    ///
    /// `end` is first aligned to `start`'s lattice phase (see [`align_to`]).
    /// If the direct search hits the expansion ceiling, the query is split
    /// once at the aligned midpoint and both halves are searched on their
    /// own; the route fails if either half fails.
    ///
    /// Water only raises the cost of a step, so a route may still cross it
    /// when nothing dry connects the endpoints. Such a route is returned
    /// with a warning; [`wet_columns`] counts its wet points.
    pub fn route<T: Terrain + ?Sized>(
        &mut self,
        terrain: &T,
        start: Point3,
        end: Point3,
    ) -> Result<Path, RouteError> {
        if !terrain.in_bounds(start.xz()) {
            return Err(RouteError::StartOutOfBounds(start));
        }
        let end = align_to(terrain, start, end);
        if !terrain.in_bounds(end.xz()) {
            return Err(RouteError::EndOutOfBounds(end));
        }

        let pather = HighwayPather::new(terrain, self.config.policy, self.config.weights);
        let no_route = RouteError::NoRoute { start, end };

        let path = match self.search(&pather, start, end) {
            Search::Found(path) => path,
            Search::NoRoute => return Err(no_route),
            Search::Exhausted => {
                let midpoint = align_to(terrain, start, (start + end) / 2);
                log::warn!(
                    "route {start} -> {end} took too long, trying through the midpoint {midpoint}"
                );
                if !terrain.in_bounds(midpoint.xz()) {
                    return Err(no_route);
                }

                let Search::Found(mut first) = self.search(&pather, start, midpoint) else {
                    return Err(no_route);
                };
                let Search::Found(second) = self.search(&pather, midpoint, end) else {
                    return Err(no_route);
                };

                first.pop();
                first.extend(second);
                first
            }
        };

        let wet = wet_columns(terrain, &path);
        if wet > 0 {
            log::warn!("route {start} -> {end} crosses water at {wet} points");
        }
        Ok(path)
    }
}

/// Number of points of `path` that stand on water.
pub fn wet_columns<T: Terrain + ?Sized>(terrain: &T, path: &[Point3]) -> usize {
    path.iter().filter(|p| terrain.is_water(p.xz())).count()
}
