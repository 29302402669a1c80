//! Castling rights stored as a 4-bit field within a `u8`.
//!
//! Castling is disabled in this variant: every game starts with
//! [`CastleRights::NONE`] and [`CastleRights::updated_after`] never grants a
//! right. The rights are still snapshotted once per ply so the history log
//! stays in lockstep with the move log.

use std::fmt;

use crate::chess_move::Move;
use crate::color::Color;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

/// Castling rights encoded as a 4-bit field: bit 0 = WK, 1 = WQ, 2 = BK, 3 = BQ.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastleRights(u8);

impl CastleRights {
    /// No castling rights.
    pub const NONE: CastleRights = CastleRights(0);

    pub const WHITE_KING: CastleRights = CastleRights(0b0001);
    pub const WHITE_QUEEN: CastleRights = CastleRights(0b0010);
    pub const BLACK_KING: CastleRights = CastleRights(0b0100);
    pub const BLACK_QUEEN: CastleRights = CastleRights(0b1000);

    /// Return `true` if no castling rights remain.
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Check whether a specific color and side may castle.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        (self.0 & Self::flag(color, side).0) != 0
    }

    #[inline]
    const fn flag(color: Color, side: CastleSide) -> CastleRights {
        match (color, side) {
            (Color::White, CastleSide::KingSide) => Self::WHITE_KING,
            (Color::White, CastleSide::QueenSide) => Self::WHITE_QUEEN,
            (Color::Black, CastleSide::KingSide) => Self::BLACK_KING,
            (Color::Black, CastleSide::QueenSide) => Self::BLACK_QUEEN,
        }
    }

    /// Rights after `mv` has been played.
    ///
    /// Rights only ever shrink, and with every right already gone there is
    /// nothing left to revoke.
    pub fn updated_after(self, _mv: &Move) -> CastleRights {
        self
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        if self.is_empty() {
            return "-".to_string();
        }
        let mut s = String::with_capacity(4);
        for (flag, c) in [
            (Self::WHITE_KING, 'K'),
            (Self::WHITE_QUEEN, 'Q'),
            (Self::BLACK_KING, 'k'),
            (Self::BLACK_QUEEN, 'q'),
        ] {
            if self.0 & flag.0 != 0 {
                s.push(c);
            }
        }
        s
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CastleRights({})", self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::{CastleRights, CastleSide};
    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn none_grants_nothing() {
        let rights = CastleRights::NONE;
        assert!(rights.is_empty());
        for color in Color::ALL {
            assert!(!rights.has(color, CastleSide::KingSide));
            assert!(!rights.has(color, CastleSide::QueenSide));
        }
        assert_eq!(format!("{rights}"), "-");
    }

    #[test]
    fn flags_are_independent() {
        let rights = CastleRights(0b1111 & !CastleRights::WHITE_QUEEN.0);
        assert!(rights.has(Color::White, CastleSide::KingSide));
        assert!(!rights.has(Color::White, CastleSide::QueenSide));
        assert!(rights.has(Color::Black, CastleSide::QueenSide));
        assert_eq!(rights.to_fen(), "Kkq");
    }

    #[test]
    fn king_move_keeps_rights_disabled() {
        let board = Board::starting_position();
        let mv = Move::new(&board, Square::new(6, 4), Square::new(4, 4));
        assert_eq!(CastleRights::NONE.updated_after(&mv), CastleRights::NONE);
    }
}
