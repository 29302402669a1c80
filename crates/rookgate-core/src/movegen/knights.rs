//! Knight move generation.

use crate::chess_move::Move;
use crate::direction::Direction;
use crate::square::Square;

use super::GenContext;

pub(super) fn gen_knight(ctx: &GenContext<'_>, from: Square, moves: &mut Vec<Move>) {
    // A knight jump always leaves the pin line.
    if ctx.pin_direction(from).is_some() {
        return;
    }
    for offset in Direction::KNIGHT {
        if let Some(to) = from.step(offset, 1) {
            if ctx.is_enterable(to) {
                moves.push(Move::new(ctx.board, from, to));
            }
        }
    }
}
