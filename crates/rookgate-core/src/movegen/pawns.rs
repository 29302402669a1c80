//! Pawn move generation.
//!
//! Promotion is gated: a pawn reaching the last row becomes a rook, but only
//! while its side has fewer than two rooks on the board. Otherwise no move
//! onto the last row is generated at all.

use crate::chess_move::Move;
use crate::direction::Direction;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use super::GenContext;

pub(super) fn gen_pawn(ctx: &GenContext<'_>, from: Square, moves: &mut Vec<Move>) {
    let forward = ctx.side.forward();
    let promotion_allowed = ctx.board.count(Piece::new(PieceKind::Rook, ctx.side)) < 2;

    // Pushes
    let push = Direction::new(forward, 0);
    if ctx.may_move_along(from, push) {
        if let Some(one) = from.step(push, 1) {
            if ctx.board.is_empty(one) {
                push_advance(ctx, from, one, promotion_allowed, moves);

                if from.row() == ctx.side.pawn_start_row() {
                    if let Some(two) = from.step(push, 2) {
                        if ctx.board.is_empty(two) {
                            moves.push(Move::new(ctx.board, from, two));
                        }
                    }
                }
            }
        }
    }

    // Captures
    for dc in [-1, 1] {
        let dir = Direction::new(forward, dc);
        if !ctx.may_move_along(from, dir) {
            continue;
        }
        let Some(to) = from.step(dir, 1) else {
            continue;
        };
        match ctx.board.piece_at(to) {
            Some(target) if target.color() != ctx.side => {
                push_advance(ctx, from, to, promotion_allowed, moves);
            }
            None if ctx.en_passant == Some(to) => {
                let victim = Square::new(from.row(), to.col());
                let victim_is_pawn = ctx
                    .board
                    .piece_at(victim)
                    .is_some_and(|piece| piece.is(PieceKind::Pawn, ctx.side.flip()));
                if victim_is_pawn && !en_passant_exposes_king(ctx, from, victim)
                {
                    moves.push(Move::new_en_passant(ctx.board, from, to));
                }
            }
            _ => {}
        }
    }
}

/// Push a pawn step or capture, applying the promotion gate on the last row.
fn push_advance(
    ctx: &GenContext<'_>,
    from: Square,
    to: Square,
    promotion_allowed: bool,
    moves: &mut Vec<Move>,
) {
    if to.row() != ctx.side.promotion_row() {
        moves.push(Move::new(ctx.board, from, to));
    } else if promotion_allowed {
        moves.push(Move::new_promotion(ctx.board, from, to));
    }
}

/// Return `true` if taking the pawn on `victim` en passant from `from`
/// would uncover a rook or queen attack along the shared rank.
///
/// Both pawns leave the rank at once, which the pin scan cannot see: scan
/// inward from the king to the pawn pair for blockers, then outward past
/// the pair for the first piece.
fn en_passant_exposes_king(ctx: &GenContext<'_>, from: Square, victim: Square) -> bool {
    let row = from.row();
    if ctx.king_sq.row() != row {
        return false;
    }

    let near = from.col().min(victim.col());
    let far = from.col().max(victim.col());
    let king_col = ctx.king_sq.col();
    let (inward, outward_start, outward) = if king_col < near {
        (king_col + 1..near, far, Direction::RIGHT)
    } else {
        (far + 1..king_col, near, Direction::LEFT)
    };

    if inward
        .into_iter()
        .any(|col| !ctx.board.is_empty(Square::new(row, col)))
    {
        return false;
    }

    let start = Square::new(row, outward_start);
    for distance in 1..Square::SIZE as i8 {
        let Some(sq) = start.step(outward, distance) else {
            break;
        };
        if let Some(piece) = ctx.board.piece_at(sq) {
            return piece.color() != ctx.side && piece.kind().slides_orthogonally();
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use crate::attacks::analyze;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::fen::parse_board;
    use crate::square::Square;

    use super::super::{GenContext, pseudo_legal_moves};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn pawn_moves(placement: &str, side: Color, ep: Option<&str>, from: &str) -> Vec<Move> {
        let board = parse_board(placement).unwrap();
        let king_sq = board.find_king(side).unwrap();
        let analysis = analyze(&board, king_sq, side);
        let ctx = GenContext {
            board: &board,
            side,
            king_sq,
            en_passant: ep.map(sq),
            pins: &analysis.pins,
        };
        pseudo_legal_moves(&ctx)
            .into_iter()
            .filter(|m| m.from() == sq(from))
            .collect()
    }

    fn targets(moves: &[Move]) -> Vec<String> {
        let mut out: Vec<String> = moves.iter().map(|m| m.to().to_string()).collect();
        out.sort();
        out
    }

    #[test]
    fn single_and_double_push() {
        let moves = pawn_moves("4k3/8/8/8/8/8/4P3/4K3", Color::White, None, "e2");
        assert_eq!(targets(&moves), vec!["e3", "e4"]);
        let moves = pawn_moves("4k3/4p3/8/8/8/8/8/4K3", Color::Black, None, "e7");
        assert_eq!(targets(&moves), vec!["e5", "e6"]);
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let moves = pawn_moves("4k3/8/8/8/4n3/8/4P3/4K3", Color::White, None, "e2");
        assert_eq!(targets(&moves), vec!["e3"]);
        let moves = pawn_moves("4k3/8/8/8/8/4n3/4P3/4K3", Color::White, None, "e2");
        assert!(moves.is_empty());
    }

    #[test]
    fn no_double_push_off_start_row() {
        let moves = pawn_moves("4k3/8/8/8/8/4P3/8/4K3", Color::White, None, "e3");
        assert_eq!(targets(&moves), vec!["e4"]);
    }

    #[test]
    fn captures_only_enemies() {
        let moves = pawn_moves("4k3/8/8/3p1N2/4P3/8/8/4K3", Color::White, None, "e4");
        assert_eq!(targets(&moves), vec!["d5", "e5"]);
        assert!(moves.iter().any(|m| m.to() == sq("d5") && m.is_capture()));
    }

    #[test]
    fn en_passant_capture() {
        let moves = pawn_moves("4k3/8/8/3pP3/8/8/8/4K3", Color::White, Some("d6"), "e5");
        let ep: Vec<_> = moves.iter().filter(|m| m.is_en_passant()).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].to(), sq("d6"));
        assert_eq!(ep[0].en_passant_victim(), sq("d5"));
    }

    #[test]
    fn en_passant_exposing_king_is_suppressed() {
        // King a5, pawns b5 and c5, rook h5.
        let moves = pawn_moves("4k3/8/8/KPp4r/8/8/8/8", Color::White, Some("c6"), "b5");
        assert!(moves.iter().all(|m| !m.is_en_passant()));
        assert_eq!(targets(&moves), vec!["b6"]);
    }

    #[test]
    fn en_passant_allowed_when_rank_is_blocked() {
        // A knight between the pawns and the rook keeps the rank closed.
        let moves = pawn_moves("4k3/8/8/KPp2n1r/8/8/8/8", Color::White, Some("c6"), "b5");
        assert!(moves.iter().any(|m| m.is_en_passant()));
        let moves = pawn_moves("4k3/8/8/KNPp3r/8/8/8/8", Color::White, Some("d6"), "c5");
        assert!(moves.iter().any(|m| m.is_en_passant()));
    }

    #[test]
    fn en_passant_with_king_on_far_side() {
        // Queen a4, pawns e4 (black) and d4 (white), black king h4.
        let moves = pawn_moves("8/8/8/8/Q2Pp2k/8/8/K7", Color::Black, Some("d3"), "e4");
        assert!(moves.iter().all(|m| !m.is_en_passant()));
    }

    #[test]
    fn promotion_blocked_with_two_rooks() {
        let placement = "7k/1P6/8/8/8/8/8/R3K2R";
        let moves = pawn_moves(placement, Color::White, None, "b7");
        assert!(moves.is_empty());
    }

    #[test]
    fn promotion_allowed_after_losing_a_rook() {
        let moves = pawn_moves("r6k/1P6/8/8/8/8/8/4K2R", Color::White, None, "b7");
        assert_eq!(targets(&moves), vec!["a8", "b8"]);
        assert!(moves.iter().all(|m| m.is_pawn_promotion()));
    }

    #[test]
    fn black_promotion_gate() {
        let moves = pawn_moves("r3k2r/8/8/8/8/8/6p1/K7", Color::Black, None, "g2");
        assert!(moves.is_empty());
        let moves = pawn_moves("4k2r/8/8/8/8/8/6p1/K7", Color::Black, None, "g2");
        assert_eq!(targets(&moves), vec!["g1"]);
    }
}
