//! Board coordinates.
//!
//! Row 0 is Black's back rank (rank 8) and row 7 is White's back rank
//! (rank 1). Columns 0-7 map to files a-h.

use std::fmt;

use crate::direction::Direction;

/// A square on the 8x8 board, addressed by row and column.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Board side length.
    pub const SIZE: u8 = 8;

    /// Create a square from a row and column.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Square {
        assert!(row < Self::SIZE && col < Self::SIZE, "square off the board");
        Square { row, col }
    }

    /// Create a square from signed coordinates, returning `None` if off the board.
    #[inline]
    pub const fn try_new(row: i8, col: i8) -> Option<Square> {
        if row >= 0 && row < Self::SIZE as i8 && col >= 0 && col < Self::SIZE as i8 {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parse algebraic notation (e.g. "e4").
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }
        let (file, rank) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return None;
        }
        Some(Square::new(b'8' - rank, file - b'a'))
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step `distance` times along `dir`, or `None` when that leaves the board.
    #[inline]
    pub const fn step(self, dir: Direction, distance: i8) -> Option<Square> {
        Square::try_new(
            self.row as i8 + dir.dr * distance,
            self.col as i8 + dir.dc * distance,
        )
    }

    /// File letter, `a` through `h`.
    #[inline]
    pub const fn file_char(self) -> char {
        (b'a' + self.col) as char
    }

    /// Rank digit, `1` through `8`.
    #[inline]
    pub const fn rank_char(self) -> char {
        (b'8' - self.row) as char
    }

    /// Iterate over all 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..Self::SIZE).flat_map(|row| (0..Self::SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file_char(), self.rank_char())
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::direction::Direction;

    #[test]
    fn orientation() {
        assert_eq!(Square::from_algebraic("a8"), Some(Square::new(0, 0)));
        assert_eq!(Square::from_algebraic("h1"), Some(Square::new(7, 7)));
        assert_eq!(Square::from_algebraic("e1"), Some(Square::new(7, 4)));
        assert_eq!(format!("{}", Square::new(4, 4)), "e4");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("a0").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("e44").is_none());
    }

    #[test]
    fn try_new_bounds() {
        assert!(Square::try_new(-1, 0).is_none());
        assert!(Square::try_new(0, 8).is_none());
        assert_eq!(Square::try_new(7, 7), Some(Square::new(7, 7)));
    }

    #[test]
    #[should_panic(expected = "square off the board")]
    fn new_rejects_off_board() {
        let _ = Square::new(8, 0);
    }

    #[test]
    fn step_along_rays() {
        let e4 = Square::new(4, 4);
        assert_eq!(e4.step(Direction::UP, 1), Square::from_algebraic("e5"));
        assert_eq!(e4.step(Direction::DOWN_LEFT, 2), Square::from_algebraic("c2"));
        assert_eq!(e4.step(Direction::UP, 4), Square::from_algebraic("e8"));
        assert_eq!(e4.step(Direction::UP, 5), None);
    }

    #[test]
    fn all_covers_board() {
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().next(), Some(Square::new(0, 0)));
    }
}
