//! Check and pin detection by ray casting from a square.
//!
//! Rays are cast in the 8 compass directions and knight offsets are probed.
//! The first friendly piece on a ray is a pin candidate; it becomes a pin
//! when the next piece along the same ray is an enemy that attacks along
//! that ray. The first enemy piece on a ray gives check when its attack
//! geometry matches the ray and distance.

use crate::board::Board;
use crate::color::Color;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// A friendly piece that may only move along the line between its king and
/// an enemy slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pin {
    /// Square of the pinned piece.
    pub square: Square,
    /// Square of the pinning enemy piece.
    pub attacker: Square,
    /// Ray direction from the king toward the pinned piece.
    pub direction: Direction,
}

/// An enemy piece attacking the king.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Check {
    /// Square of the checking piece.
    pub attacker: Square,
    /// Ray direction (or knight offset) from the king toward the attacker.
    pub direction: Direction,
}

/// Result of scanning the rays around one square.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub in_check: bool,
    pub pins: Vec<Pin>,
    pub checks: Vec<Check>,
}

impl Analysis {
    /// Pin entry for the piece on `sq`, if it is pinned.
    pub fn pin_on(&self, sq: Square) -> Option<&Pin> {
        pin_on(&self.pins, sq)
    }
}

/// Find the pin entry for the piece on `sq`.
#[inline]
pub(crate) fn pin_on(pins: &[Pin], sq: Square) -> Option<&Pin> {
    pins.iter().find(|pin| pin.square == sq)
}

/// Return `true` if `attacker`, found `distance` squares away along `dir`,
/// attacks back along that ray.
fn attacks_along(attacker: Piece, dir: Direction, distance: i8) -> bool {
    match attacker.kind() {
        PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen => {
            (dir.is_orthogonal() && attacker.kind().slides_orthogonally())
                || (dir.is_diagonal() && attacker.kind().slides_diagonally())
        }
        PieceKind::King => distance == 1,
        // The pawn sits diagonally "ahead" of the target from its own point
        // of view, i.e. the ray points against the pawn's forward direction.
        PieceKind::Pawn => {
            distance == 1 && dir.is_diagonal() && dir.dr == -attacker.color().forward()
        }
        PieceKind::Knight => false,
    }
}

/// Scan the rays around `king_sq` for `side`, treating `king_sq` as the
/// location of `side`'s king.
///
/// `king_sq` need not hold the king: probing a candidate king destination
/// roots the scan there. The real king stays on the board meanwhile and is
/// skipped over, so it never shields its own destination.
pub fn analyze(board: &Board, king_sq: Square, side: Color) -> Analysis {
    let mut analysis = Analysis::default();

    for dir in Direction::ALL {
        let mut candidate: Option<Square> = None;
        for distance in 1..Square::SIZE as i8 {
            let Some(sq) = king_sq.step(dir, distance) else {
                break;
            };
            let Some(piece) = board.piece_at(sq) else {
                continue;
            };

            if piece.color() == side {
                if piece.kind() == PieceKind::King {
                    continue;
                }
                if candidate.is_some() {
                    // Two friendly pieces: nothing behind them matters.
                    break;
                }
                candidate = Some(sq);
                continue;
            }

            if attacks_along(piece, dir, distance) {
                match candidate {
                    None => analysis.checks.push(Check {
                        attacker: sq,
                        direction: dir,
                    }),
                    Some(pinned) => analysis.pins.push(Pin {
                        square: pinned,
                        attacker: sq,
                        direction: dir,
                    }),
                }
            }
            break;
        }
    }

    let them = side.flip();
    for offset in Direction::KNIGHT {
        if let Some(sq) = king_sq.step(offset, 1) {
            if board
                .piece_at(sq)
                .is_some_and(|piece| piece.is(PieceKind::Knight, them))
            {
                analysis.checks.push(Check {
                    attacker: sq,
                    direction: offset,
                });
            }
        }
    }

    analysis.in_check = !analysis.checks.is_empty();
    analysis
}

/// Return `true` if `sq` is attacked by the opponent of `side`.
///
/// Runs the same scan as [`analyze`] rooted at `sq`.
pub fn square_under_attack(board: &Board, sq: Square, side: Color) -> bool {
    analyze(board, sq, side).in_check
}
