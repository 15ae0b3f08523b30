//! The eight horizontal compass directions.

use std::fmt;

use crate::geom::Point2;

/// A horizontal compass direction. North is `-z`, east is `+x`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from north.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four axis-aligned directions.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four diagonal directions.
    pub const ORDINAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// Unit offset of one step in this direction.
    #[inline]
    pub const fn offset(self) -> Point2 {
        match self {
            Direction::North => Point2::new(0, -1),
            Direction::NorthEast => Point2::new(1, -1),
            Direction::East => Point2::new(1, 0),
            Direction::SouthEast => Point2::new(1, 1),
            Direction::South => Point2::new(0, 1),
            Direction::SouthWest => Point2::new(-1, 1),
            Direction::West => Point2::new(-1, 0),
            Direction::NorthWest => Point2::new(-1, -1),
        }
    }

    /// Whether this is an axis-aligned direction.
    #[inline]
    pub const fn is_cardinal(self) -> bool {
        matches!(
            self,
            Direction::North | Direction::East | Direction::South | Direction::West
        )
    }

    #[inline]
    const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    const fn from_index(i: usize) -> Direction {
        Self::ALL[i % 8]
    }

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Direction {
        Self::from_index(self.index() + 4)
    }

    /// 45° counter-clockwise.
    #[inline]
    pub const fn rotate_left(self) -> Direction {
        Self::from_index(self.index() + 7)
    }

    /// 45° clockwise.
    #[inline]
    pub const fn rotate_right(self) -> Direction {
        Self::from_index(self.index() + 1)
    }

    /// 90° counter-clockwise.
    #[inline]
    pub const fn turn_left(self) -> Direction {
        Self::from_index(self.index() + 6)
    }

    /// 90° clockwise.
    #[inline]
    pub const fn turn_right(self) -> Direction {
        Self::from_index(self.index() + 2)
    }

    /// Lower-case name, e.g. `"north_east"`.
    pub const fn name(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::NorthEast => "north_east",
            Direction::East => "east",
            Direction::SouthEast => "south_east",
            Direction::South => "south",
            Direction::SouthWest => "south_west",
            Direction::West => "west",
            Direction::NorthWest => "north_west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_match_point_neighbors() {
        let p = Point2::new(7, -2);
        let from_dirs: Vec<Point2> = Direction::ALL.iter().map(|d| p + d.offset()).collect();
        assert_eq!(from_dirs, p.neighbors_8().to_vec());
        let cardinal: Vec<Point2> = Direction::CARDINAL.iter().map(|d| p + d.offset()).collect();
        assert_eq!(cardinal, p.neighbors_4().to_vec());
    }

    #[test]
    fn opposite_cancels_offset() {
        for d in Direction::ALL {
            assert_eq!(d.offset() + d.opposite().offset(), Point2::ZERO);
            assert_eq!(d.opposite().opposite(), d);
        }
    }

    #[test]
    fn rotations_are_inverse() {
        for d in Direction::ALL {
            assert_eq!(d.rotate_left().rotate_right(), d);
            assert_eq!(d.turn_left().turn_right(), d);
            assert_eq!(d.rotate_right().rotate_right(), d.turn_right());
        }
        assert_eq!(Direction::North.turn_right(), Direction::East);
        assert_eq!(Direction::North.rotate_left(), Direction::NorthWest);
        assert_eq!(Direction::West.turn_left(), Direction::South);
    }

    #[test]
    fn cardinal_and_ordinal_partition_all() {
        for d in Direction::CARDINAL {
            assert!(d.is_cardinal());
        }
        for d in Direction::ORDINAL {
            assert!(!d.is_cardinal());
            let o = d.offset();
            assert_eq!(o.x.abs() + o.z.abs(), 2);
        }
    }
}
