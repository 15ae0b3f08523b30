//! Route finding and path densification for highways over terrain.
//!
//! - **Bounded best-first search** ([`Router::search`]) with an explicit
//!   expansion ceiling and a tagged [`Search`] outcome
//! - **Routing** ([`Router::route`]) that aligns the end to the start's
//!   lattice and splits an exhausted query once at the midpoint
//! - **Densification** ([`densify`]) of sparse lattice waypoints into a
//!   point-per-unit path
//! - **Nearest road** lookup ([`nearest_road`]) by capped breadth-first
//!   search
//!
//! [`Router`] owns and reuses its internal caches so repeated queries incur
//! no allocations after warm-up.
//!
//! # Trait hierarchy
//!
//! | Trait | Required for |
//! |---|---|
//! | [`Pather`] | neighbor enumeration |
//! | [`RoutePather`] : [`Pather`] | [`Router::search`] |
//!
//! [`HighwayPather`] implements both over any
//! [`Terrain`](causeway_core::Terrain).

mod astar;
mod bfs;
mod densify;
mod distance;
mod highway;
mod neighbors;
mod route;
mod router;
mod traits;

pub use bfs::nearest_road;
pub use densify::{DensifyError, densify, densify_strict};
pub use distance::chebyshev;
pub use highway::{CostWeights, HighwayPather, NeighborPolicy};
pub use neighbors::Neighbors;
pub use route::{LATTICE, RouteError, align_to, wet_columns};
pub use router::{DEFAULT_CEILING, Path, Router, Search, SearchConfig};
pub use traits::{Pather, RoutePather};
