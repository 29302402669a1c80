//! A single executed or candidate ply.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// An immutable move record.
///
/// The moved and captured pieces are read from the board when the move is
/// constructed. Undo replays the record rather than re-reading the board.
///
/// Equality and hashing use only [`Move::id`], so a move built from a bare
/// origin/destination pair compares equal to the flagged move the generator
/// produced for the same squares.
#[derive(Clone, Copy)]
pub struct Move {
    from: Square,
    to: Square,
    piece_moved: Piece,
    piece_captured: Option<Piece>,
    en_passant: bool,
    pawn_promotion: bool,
    castle: bool,
}

impl Move {
    /// Create a quiet move or plain capture.
    ///
    /// # Panics
    ///
    /// Panics if `from` is empty.
    pub fn new(board: &Board, from: Square, to: Square) -> Move {
        let piece_moved = board
            .piece_at(from)
            .unwrap_or_else(|| panic!("no piece to move on {from}"));
        Move {
            from,
            to,
            piece_moved,
            piece_captured: board.piece_at(to),
            en_passant: false,
            pawn_promotion: false,
            castle: false,
        }
    }

    /// Create a pawn move onto the last row. The pawn becomes a rook.
    pub fn new_promotion(board: &Board, from: Square, to: Square) -> Move {
        Move {
            pawn_promotion: true,
            ..Move::new(board, from, to)
        }
    }

    /// Create an en passant capture. The captured pawn is the opponent's,
    /// standing beside `from` rather than on `to`.
    pub fn new_en_passant(board: &Board, from: Square, to: Square) -> Move {
        let base = Move::new(board, from, to);
        let victim = Piece::new(PieceKind::Pawn, base.piece_moved.color().flip());
        Move {
            piece_captured: Some(victim),
            en_passant: true,
            ..base
        }
    }

    #[inline]
    pub const fn from(&self) -> Square {
        self.from
    }

    #[inline]
    pub const fn to(&self) -> Square {
        self.to
    }

    #[inline]
    pub const fn piece_moved(&self) -> Piece {
        self.piece_moved
    }

    #[inline]
    pub const fn piece_captured(&self) -> Option<Piece> {
        self.piece_captured
    }

    #[inline]
    pub const fn is_en_passant(&self) -> bool {
        self.en_passant
    }

    #[inline]
    pub const fn is_pawn_promotion(&self) -> bool {
        self.pawn_promotion
    }

    /// Always `false`: no castling move is ever generated.
    #[inline]
    pub const fn is_castle(&self) -> bool {
        self.castle
    }

    #[inline]
    pub const fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Color of the side making the move.
    #[inline]
    pub const fn color(&self) -> Color {
        self.piece_moved.color()
    }

    /// Square of the pawn taken by an en passant capture.
    #[inline]
    pub const fn en_passant_victim(&self) -> Square {
        Square::new(self.from.row(), self.to.col())
    }

    /// Identity key: a bijective encoding of the four coordinates.
    #[inline]
    pub const fn id(&self) -> u16 {
        Self::id_of(self.from, self.to)
    }

    /// Identity key of any move joining `from` to `to`.
    #[inline]
    pub const fn id_of(from: Square, to: Square) -> u16 {
        from.row() as u16 * 1000 + from.col() as u16 * 100 + to.row() as u16 * 10 + to.col() as u16
    }

    /// Origin and destination squares, e.g. `e2e4`.
    pub fn to_coordinate_notation(&self) -> String {
        format!("{}{}", self.from, self.to)
    }

    /// Algebraic-style notation: `e4`, `exd5`, `d8=R`, `Nf3`, `Rxe5`.
    pub fn to_notation(&self) -> String {
        if self.castle {
            return if self.to.col() == 6 { "O-O" } else { "O-O-O" }.to_string();
        }

        match self.piece_moved.kind() {
            PieceKind::Pawn => {
                if self.is_capture() && self.pawn_promotion {
                    format!("{}=R", self.to)
                } else if self.is_capture() {
                    format!("{}x{}", self.from.file_char(), self.to)
                } else {
                    self.to.to_string()
                }
            }
            kind => {
                let capture = if self.is_capture() { "x" } else { "" };
                format!("{}{}{}", kind.letter(), capture, self.to)
            }
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Move) -> bool {
        self.id() == other.id()
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_notation())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Move({} {:?}",
            self.to_coordinate_notation(),
            self.piece_moved
        )?;
        if let Some(captured) = self.piece_captured {
            write!(f, " x{captured:?}")?;
        }
        if self.en_passant {
            write!(f, " ep")?;
        }
        if self.pawn_promotion {
            write!(f, " =R")?;
        }
        write!(f, ")")
    }
}
