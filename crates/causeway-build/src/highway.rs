//! The highway pipeline: route, densify, expand, surface, commit.

use std::collections::BTreeMap;
use std::fmt;

use causeway_core::{Placer, Point3, Terrain};
use causeway_paths::{
    DensifyError, Path, RouteError, Router, SearchConfig, densify, densify_strict, wet_columns,
};

use crate::commit::{CommitStats, Plan, commit};
use crate::footprint::FootprintSets;
use crate::palette::{WeightedPalette, select};

/// Highway construction settings.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HighwayConfig {
    /// Whether to lay the outer border ring.
    pub border: bool,
    /// Air blocks cleared above an obstructed surface.
    pub clearance: i32,
    /// Width of a surface noise cell, in columns.
    pub noise_scale: f64,
    /// Reject waypoints that are not one lattice step apart instead of
    /// leaving a gap.
    pub strict_waypoints: bool,
    /// Accept routes that cross water. When unset, a route with any wet
    /// point fails with [`RouteError::NoRoute`].
    pub cross_water: bool,
    pub search: SearchConfig,
}

impl Default for HighwayConfig {
    fn default() -> Self {
        Self {
            border: true,
            clearance: 6,
            noise_scale: 4.0,
            strict_waypoints: false,
            cross_water: true,
            search: SearchConfig::default(),
        }
    }
}

/// Errors that can occur while building a highway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError<E> {
    Route(RouteError),
    Densify(DensifyError),
    /// The placer refused a block.
    Place(E),
}

impl<E: fmt::Display> fmt::Display for BuildError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Route(e) => write!(f, "routing failed: {e}"),
            Self::Densify(e) => write!(f, "bad waypoints: {e}"),
            Self::Place(e) => write!(f, "placing blocks failed: {e}"),
        }
    }
}

impl<E: fmt::Debug + fmt::Display> std::error::Error for BuildError<E> {}

impl<E> From<RouteError> for BuildError<E> {
    fn from(e: RouteError) -> Self {
        Self::Route(e)
    }
}

impl<E> From<DensifyError> for BuildError<E> {
    fn from(e: DensifyError) -> Self {
        Self::Densify(e)
    }
}

/// Builds highways with one configuration and pair of palettes.
///
/// The builder owns a [`Router`] that is reused across calls.
pub struct HighwayBuilder {
    config: HighwayConfig,
    main: WeightedPalette,
    border: WeightedPalette,
    router: Router,
}

impl Default for HighwayBuilder {
    fn default() -> Self {
        Self::new(
            HighwayConfig::default(),
            WeightedPalette::main_path(),
            WeightedPalette::border_path(),
        )
    }
}

impl HighwayBuilder {
    pub fn new(config: HighwayConfig, main: WeightedPalette, border: WeightedPalette) -> Self {
        let router = Router::new(config.search);
        Self {
            config,
            main,
            border,
            router,
        }
    }

    pub fn config(&self) -> &HighwayConfig {
        &self.config
    }

    /// Expansions of the most recent search.
    pub fn expansions(&self) -> usize {
        self.router.expansions()
    }

    /// Route from `start` to `end` and densify the result.
    ///
    /// Consecutive router waypoints are always one lattice step apart, so
    /// `strict_waypoints` has nothing to reject here; it only applies to
    /// waypoints handed to [`plan`](Self::plan) and [`build`](Self::build).
    /// With `cross_water` unset, a route that touches water is refused.
    pub fn route<T: Terrain + ?Sized>(
        &mut self,
        terrain: &T,
        start: Point3,
        end: Point3,
    ) -> Result<Path, RouteError> {
        let sparse = self.router.route(terrain, start, end)?;
        let path = densify(&sparse);
        if !self.config.cross_water {
            let wet = wet_columns(terrain, &path);
            if wet > 0 {
                log::debug!("refusing route {start} -> {end}: {wet} wet points");
                let end = path.last().copied().unwrap_or(end);
                return Err(RouteError::NoRoute { start, end });
            }
        }
        Ok(path)
    }

    /// Densify `waypoints`, expand the footprint and choose every surface.
    pub fn plan<T: Terrain + ?Sized>(
        &self,
        terrain: &T,
        waypoints: &[Point3],
    ) -> Result<Plan, DensifyError> {
        let path = if self.config.strict_waypoints {
            densify_strict(waypoints)?
        } else {
            densify(waypoints)
        };
        let footprint = FootprintSets::expand(&path, terrain, self.config.border);
        let wet = wet_columns(terrain, &path);

        let mut surfaces = BTreeMap::new();
        let main = footprint.main_elevations();
        for &p in main.keys() {
            if let Some(s) = select(p, &main, &self.main, self.config.noise_scale) {
                surfaces.insert(p, s);
            }
        }
        for &p in footprint.border.keys() {
            if let Some(s) = select(p, &footprint.border, &self.border, self.config.noise_scale) {
                surfaces.insert(p, s);
            }
        }

        log::debug!(
            "planned highway of {} points over {} columns",
            path.len(),
            footprint.len()
        );
        Ok(Plan {
            path,
            footprint,
            surfaces,
            wet,
        })
    }

    /// Plan along `waypoints` and place the blocks.
    pub fn build<T, P>(
        &self,
        terrain: &T,
        placer: &mut P,
        waypoints: &[Point3],
    ) -> Result<CommitStats, BuildError<P::Error>>
    where
        T: Terrain + ?Sized,
        P: Placer + ?Sized,
    {
        let plan = self.plan(terrain, waypoints)?;
        let stats =
            commit(terrain, placer, &plan, self.config.clearance).map_err(BuildError::Place)?;
        log::info!(
            "highway built: {} placed, {} cleared, {} urban skipped, {} over water",
            stats.placed,
            stats.cleared,
            stats.skipped_urban,
            stats.wet
        );
        Ok(stats)
    }

    /// Route from `start` to `end` and build along the route.
    pub fn connect<T, P>(
        &mut self,
        terrain: &T,
        placer: &mut P,
        start: Point3,
        end: Point3,
    ) -> Result<CommitStats, BuildError<P::Error>>
    where
        T: Terrain + ?Sized,
        P: Placer + ?Sized,
    {
        let path = self.route(terrain, start, end)?;
        self.build(terrain, placer, &path)
    }
}
