//! Turning routed paths into highways.
//!
//! - **Footprint** ([`FootprintSets`]): core, shoulder and border rings
//!   around a dense path
//! - **Surfaces** ([`WeightedPalette`], [`select`]): deterministic,
//!   noise-driven block choice per column
//! - **Commit** ([`commit`]): clearing headroom and placing blocks through
//!   a [`Placer`](causeway_core::Placer)
//! - **Pipeline** ([`HighwayBuilder`]): route, plan and build in one place
//!
//! [`TerrainGrid`], [`BlockLog`] and [`TerrainGen`] provide in-memory
//! worlds for tests and offline runs.

mod commit;
mod footprint;
mod grid;
mod highway;
mod mapgen;
pub mod noise;
mod palette;

pub use commit::{CommitStats, Plan, commit};
pub use footprint::FootprintSets;
pub use grid::{BlockLog, TerrainGrid};
pub use highway::{BuildError, HighwayBuilder, HighwayConfig};
pub use mapgen::{DriftWalker, RandomWalker, TerrainGen};
pub use palette::{Bucket, PaletteError, Surface, WeightedPalette, rise_direction, select};
