//! Edge directions on the 4-connected square grid.

use std::fmt;

/// One of the four cardinal edge directions of a square tile.
///
/// Adjacency constraints are expressed per direction: a catalog's
/// `compatible(a, b, dir)` answers whether `b` may sit in direction
/// `dir` from `a`. Grid positions are `(row, col)` with row 0 at the
/// top, so [`Direction::North`] decrements the row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward row 0.
    North,
    /// Toward increasing columns.
    East,
    /// Toward increasing rows.
    South,
    /// Toward column 0.
    West,
}

impl Direction {
    /// All four directions, in the fixed N/E/S/W enumeration order.
    ///
    /// Propagation and neighbor iteration always walk this order, which
    /// keeps traversal deterministic.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction pointing back: the edge shared with a neighbor in
    /// direction `d` is the neighbor's edge in `d.opposite()`.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// `(row, col)` offset of the neighboring cell in this direction.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Direction::North => "N",
            Direction::East => "E",
            Direction::South => "S",
            Direction::West => "W",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involution() {
        for d in Direction::ALL {
            assert_eq!(d.opposite().opposite(), d);
            assert_ne!(d.opposite(), d);
        }
    }

    #[test]
    fn offsets_cancel_with_opposite() {
        for d in Direction::ALL {
            let (dr, dc) = d.offset();
            let (or, oc) = d.opposite().offset();
            assert_eq!((dr + or, dc + oc), (0, 0));
        }
    }

    #[test]
    fn enumeration_order_is_nesw() {
        assert_eq!(
            Direction::ALL,
            [
                Direction::North,
                Direction::East,
                Direction::South,
                Direction::West,
            ]
        );
    }
}
