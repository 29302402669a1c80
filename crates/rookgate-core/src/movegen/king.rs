//! King move generation.

use crate::attacks::analyze;
use crate::chess_move::Move;
use crate::direction::Direction;
use crate::square::Square;

use super::GenContext;

/// Generate king steps that do not leave the king attacked.
///
/// Each destination is probed by rooting the attack scan there, as if the
/// king had already moved. The board itself is never touched. No castling.
pub(crate) fn gen_king(ctx: &GenContext<'_>, from: Square, moves: &mut Vec<Move>) {
    for dir in Direction::ALL {
        let Some(to) = from.step(dir, 1) else {
            continue;
        };
        if !ctx.is_enterable(to) {
            continue;
        }
        if !analyze(ctx.board, to, ctx.side).in_check {
            moves.push(Move::new(ctx.board, from, to));
        }
    }
}
