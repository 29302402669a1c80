//! Ray directions and knight offsets, as (row delta, column delta) pairs.

use std::ops::Neg;

/// A step on the board. "Up" points toward row 0 (Black's side).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const UP: Direction = Direction::new(-1, 0);
    pub const LEFT: Direction = Direction::new(0, -1);
    pub const DOWN: Direction = Direction::new(1, 0);
    pub const RIGHT: Direction = Direction::new(0, 1);
    pub const UP_LEFT: Direction = Direction::new(-1, -1);
    pub const UP_RIGHT: Direction = Direction::new(-1, 1);
    pub const DOWN_LEFT: Direction = Direction::new(1, -1);
    pub const DOWN_RIGHT: Direction = Direction::new(1, 1);

    /// Rook rays.
    pub const ORTHOGONAL: [Direction; 4] =
        [Direction::UP, Direction::LEFT, Direction::DOWN, Direction::RIGHT];

    /// Bishop rays.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::UP_LEFT,
        Direction::UP_RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN_RIGHT,
    ];

    /// All eight compass rays, orthogonal first.
    pub const ALL: [Direction; 8] = [
        Direction::UP,
        Direction::LEFT,
        Direction::DOWN,
        Direction::RIGHT,
        Direction::UP_LEFT,
        Direction::UP_RIGHT,
        Direction::DOWN_LEFT,
        Direction::DOWN_RIGHT,
    ];

    /// The eight knight jumps.
    pub const KNIGHT: [Direction; 8] = [
        Direction::new(-2, -1),
        Direction::new(-2, 1),
        Direction::new(-1, -2),
        Direction::new(-1, 2),
        Direction::new(1, -2),
        Direction::new(1, 2),
        Direction::new(2, -1),
        Direction::new(2, 1),
    ];

    #[inline]
    pub const fn new(dr: i8, dc: i8) -> Direction {
        Direction { dr, dc }
    }

    #[inline]
    pub const fn is_orthogonal(self) -> bool {
        (self.dr == 0) != (self.dc == 0)
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.dr != 0 && self.dr.abs() == 1 && self.dc.abs() == 1
    }

    /// Return `true` if `other` lies on the same line, in either sense.
    #[inline]
    pub fn same_axis(self, other: Direction) -> bool {
        self == other || self == -other
    }
}

impl Neg for Direction {
    type Output = Direction;

    #[inline]
    fn neg(self) -> Direction {
        Direction::new(-self.dr, -self.dc)
    }
}

#[cfg(test)]
mod tests {
    use super::Direction;

    #[test]
    fn classes() {
        assert!(Direction::ORTHOGONAL.iter().all(|d| d.is_orthogonal() && !d.is_diagonal()));
        assert!(Direction::DIAGONAL.iter().all(|d| d.is_diagonal() && !d.is_orthogonal()));
        assert!(Direction::KNIGHT.iter().all(|d| !d.is_diagonal() && !d.is_orthogonal()));
    }

    #[test]
    fn axis() {
        assert!(Direction::UP.same_axis(Direction::DOWN));
        assert!(Direction::UP_LEFT.same_axis(Direction::DOWN_RIGHT));
        assert!(!Direction::UP_LEFT.same_axis(Direction::UP_RIGHT));
        assert_eq!(-Direction::LEFT, Direction::RIGHT);
    }
}
