//! **causeway-core**: shared types for highway routing.
//!
//! This crate provides the foundational types used across the *causeway*
//! crates: geometry primitives, the eight compass directions, block
//! identifiers, and the terrain/placement collaborator traits.

pub mod direction;
pub mod geom;
pub mod world;

pub use direction::Direction;
pub use geom::{Area, AreaIter, Point2, Point3};
pub use world::{Block, District, Placer, Terrain};
