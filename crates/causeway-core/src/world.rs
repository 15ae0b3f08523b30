//! World collaborator interfaces.
//!
//! [`Terrain`] is the read-only view consulted while routing and planning.
//! [`Placer`] is the write side used only when committing blocks.

use std::borrow::Cow;
use std::fmt;

use crate::geom::{Area, Point2, Point3};

/// A block (surface material) identifier such as `"minecraft:dirt_path"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Block(Cow<'static, str>);

impl Block {
    /// Empty space.
    pub const AIR: Block = Block(Cow::Borrowed("minecraft:air"));

    /// A block with a static identifier.
    pub const fn new(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    /// A block with an owned identifier.
    pub fn owned(id: impl Into<String>) -> Self {
        Self(Cow::Owned(id.into()))
    }

    /// The identifier.
    pub fn id(&self) -> &str {
        &self.0
    }

    /// Whether this is [`Block::AIR`].
    pub fn is_air(&self) -> bool {
        *self == Self::AIR
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// District classification of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct District {
    pub id: u32,
    pub is_urban: bool,
}

/// Read-only terrain queries.
pub trait Terrain {
    /// Horizontal extent of the world.
    fn bounds(&self) -> Area;

    /// Surface elevation of the column at `p`.
    fn height_at(&self, p: Point2) -> i32;

    /// Whether the surface at `p` is water.
    fn is_water(&self, p: Point2) -> bool;

    /// District covering `p`, if any.
    fn district_at(&self, p: Point2) -> Option<District>;

    /// Whether `p` lies close to a settlement wall.
    fn near_wall(&self, _p: Point2) -> bool {
        false
    }

    /// Highest motion-blocking, non-foliage block at `p`.
    fn obstruction_height(&self, p: Point2) -> i32 {
        self.height_at(p)
    }

    /// Whether `p` lies inside [`bounds`](Self::bounds).
    #[inline]
    fn in_bounds(&self, p: Point2) -> bool {
        self.bounds().contains(p)
    }

    /// Whether the district at `p` is urban.
    #[inline]
    fn is_urban(&self, p: Point2) -> bool {
        self.district_at(p).is_some_and(|d| d.is_urban)
    }
}

impl<T: Terrain + ?Sized> Terrain for &T {
    fn bounds(&self) -> Area {
        (**self).bounds()
    }

    fn height_at(&self, p: Point2) -> i32 {
        (**self).height_at(p)
    }

    fn is_water(&self, p: Point2) -> bool {
        (**self).is_water(p)
    }

    fn district_at(&self, p: Point2) -> Option<District> {
        (**self).district_at(p)
    }

    fn near_wall(&self, p: Point2) -> bool {
        (**self).near_wall(p)
    }

    fn obstruction_height(&self, p: Point2) -> i32 {
        (**self).obstruction_height(p)
    }
}

/// Block placement sink.
pub trait Placer {
    /// Error reported by the underlying world editor.
    type Error;

    /// Place `block` at `p`.
    fn place_block(&mut self, p: Point3, block: &Block) -> Result<(), Self::Error>;

    /// Replace whatever is at `p` with air.
    fn clear_air(&mut self, p: Point3) -> Result<(), Self::Error> {
        self.place_block(p, &Block::AIR)
    }
}
