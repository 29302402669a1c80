//! Pseudo-legal move generation.
//!
//! Every piece receives the same immutable pin list and looks up its own
//! entry. Pins already restrict pawns, knights and sliders to legal lines,
//! and king moves are filtered against attacks, so the only remaining
//! legality step is resolving a check (done by the game state).

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::attacks::Pin;
use crate::board::Board;
use crate::chess_move::Move;
use crate::color::Color;
use crate::direction::Direction;
use crate::piece_kind::PieceKind;
use crate::square::Square;

pub(crate) use self::king::gen_king;

use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

/// Everything a piece generator needs to know about the position.
#[derive(Clone, Copy)]
pub(crate) struct GenContext<'a> {
    pub board: &'a Board,
    pub side: Color,
    pub king_sq: Square,
    pub en_passant: Option<Square>,
    pub pins: &'a [Pin],
}

impl GenContext<'_> {
    /// Pin direction for the piece on `sq`, if pinned.
    #[inline]
    fn pin_direction(&self, sq: Square) -> Option<Direction> {
        crate::attacks::pin_on(self.pins, sq).map(|pin| pin.direction)
    }

    /// Return `true` if the piece on `sq` may move along `dir`.
    #[inline]
    fn may_move_along(&self, sq: Square, dir: Direction) -> bool {
        self.pin_direction(sq).is_none_or(|pin| pin.same_axis(dir))
    }

    /// Return `true` if `sq` is empty or holds an enemy piece.
    #[inline]
    fn is_enterable(&self, sq: Square) -> bool {
        self.board.color_at(sq) != Some(self.side)
    }
}

/// Generate all pseudo-legal moves for `side`.
pub(crate) fn pseudo_legal_moves(ctx: &GenContext<'_>) -> Vec<Move> {
    let mut moves = Vec::with_capacity(64);
    for (sq, piece) in ctx.board.pieces() {
        if piece.color() != ctx.side {
            continue;
        }
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(ctx, sq, &mut moves),
            PieceKind::Rook => gen_slider(ctx, sq, &Direction::ORTHOGONAL, &mut moves),
            PieceKind::Knight => gen_knight(ctx, sq, &mut moves),
            PieceKind::Bishop => gen_slider(ctx, sq, &Direction::DIAGONAL, &mut moves),
            PieceKind::Queen => {
                gen_slider(ctx, sq, &Direction::DIAGONAL, &mut moves);
                gen_slider(ctx, sq, &Direction::ORTHOGONAL, &mut moves);
            }
            PieceKind::King => gen_king(ctx, sq, &mut moves),
        }
    }
    moves
}
