//! Sliding piece (rook, bishop, queen) move generation.

use crate::chess_move::Move;
use crate::direction::Direction;
use crate::square::Square;

use super::GenContext;

/// Slide from `from` along each of `dirs` until blocked.
pub(super) fn gen_slider(
    ctx: &GenContext<'_>,
    from: Square,
    dirs: &[Direction],
    moves: &mut Vec<Move>,
) {
    for &dir in dirs {
        if !ctx.may_move_along(from, dir) {
            continue;
        }
        for distance in 1..Square::SIZE as i8 {
            let Some(to) = from.step(dir, distance) else {
                break;
            };
            match ctx.board.color_at(to) {
                None => moves.push(Move::new(ctx.board, from, to)),
                Some(color) if color != ctx.side => {
                    moves.push(Move::new(ctx.board, from, to));
                    break;
                }
                Some(_) => break,
            }
        }
    }
}
