//! Integration tests for the rules engine.
//!
//! Exercises the public API the way a front end does: ask for legal moves,
//! play one, take it back, and check that nothing drifts.

use rookgate_core::{
    Board, CastleRights, Color, GameState, GameStatus, Move, Piece, PieceKind, Square,
    new_game, perft, square_under_attack,
};

const POSITION_3_FEN: &str = "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1";

const MIDDLEGAME_FEN: &str = "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w - - 4 4";

const PROMOTION_FEN: &str = "3qk3/1P4P1/8/8/8/8/1p4p1/3QK3 w - - 0 1";

const EN_PASSANT_FEN: &str = "4k3/8/8/KPp4r/8/8/8/8 w - c6 0 1";

/// Everything `undo_move` has to put back.
#[derive(Debug, PartialEq)]
struct Snapshot {
    board: Board,
    side: Color,
    en_passant: Option<Square>,
    castle_rights: CastleRights,
    ply: usize,
    kings: [Square; 2],
}

fn snapshot(state: &GameState) -> Snapshot {
    Snapshot {
        board: *state.board(),
        side: state.side_to_move(),
        en_passant: state.en_passant(),
        castle_rights: state.castle_rights(),
        ply: state.move_log().len(),
        kings: [
            state.king_square(Color::White),
            state.king_square(Color::Black),
        ],
    }
}

fn sq(s: &str) -> Square {
    Square::from_algebraic(s).unwrap()
}

/// Helper: play a move in coordinate notation, panicking if it is illegal.
fn play(state: &mut GameState, uci: &str) -> Move {
    let moves = state.valid_moves();
    let mv = GameState::find_move(&moves, sq(&uci[0..2]), sq(&uci[2..4]))
        .unwrap_or_else(|| panic!("{uci} is not legal in {}", state.to_fen()));
    state.make_move(mv);
    mv
}

/// Walk the tree to `depth`, calling `visit` after every move is made.
fn walk(state: &mut GameState, depth: usize, visit: &mut impl FnMut(&GameState, &Move)) {
    if depth == 0 {
        return;
    }
    for mv in state.valid_moves() {
        let before = snapshot(state);
        state.make_move(mv);
        visit(state, &mv);
        walk(state, depth - 1, visit);
        let undone = state.undo_move();
        assert_eq!(undone, Some(mv));
        assert_eq!(snapshot(state), before, "undo of {mv:?} did not restore the state");
    }
}

fn test_positions() -> Vec<GameState> {
    [POSITION_3_FEN, MIDDLEGAME_FEN, PROMOTION_FEN, EN_PASSANT_FEN]
        .into_iter()
        .map(|fen| GameState::from_fen(fen).unwrap())
        .chain(std::iter::once(new_game()))
        .collect()
}

// ── Make / undo ───────────────────────────────────────────────────────────────

#[test]
fn undo_is_the_inverse_of_make() {
    for mut state in test_positions() {
        walk(&mut state, 3, &mut |_: &GameState, _: &Move| {});
        assert!(state.move_log().is_empty());
    }
}

#[test]
fn undo_with_empty_history_does_nothing() {
    let mut state = new_game();
    let before = snapshot(&state);
    assert_eq!(state.undo_move(), None);
    assert_eq!(snapshot(&state), before);
}

#[test]
fn logs_track_every_ply() {
    let mut state = new_game();
    for uci in ["e2e4", "d7d5", "e4d5", "d8d5"] {
        play(&mut state, uci);
    }
    assert_eq!(state.move_log().len(), 4);
    assert_eq!(state.captured_pieces(Color::Black), vec![Piece::BLACK_PAWN]);
    assert_eq!(state.captured_pieces(Color::White), vec![Piece::WHITE_PAWN]);
    assert_eq!(state.history_text(), "1. e4 d5 2. exd5 Qxd5");

    while state.undo_move().is_some() {}
    assert_eq!(*state.board(), Board::starting_position());
    assert_eq!(state.en_passant(), None);
}

// ── Legality ──────────────────────────────────────────────────────────────────

#[test]
fn no_move_leaves_mover_in_check() {
    for mut state in test_positions() {
        walk(&mut state, 2, &mut |after: &GameState, mv: &Move| {
            let mover = mv.color();
            assert!(
                !square_under_attack(after.board(), after.king_square(mover), mover),
                "{mv:?} leaves the {} king attacked",
                mover.name()
            );
        });
    }
}

#[test]
fn check_flag_agrees_with_attack_query() {
    for mut state in test_positions() {
        walk(&mut state, 2, &mut |after: &GameState, _: &Move| {
            let mut after = after.clone();
            after.valid_moves();
            let side = after.side_to_move();
            assert_eq!(
                after.in_check(),
                square_under_attack(after.board(), after.king_square(side), side)
            );
        });
    }
}

#[test]
fn double_check_allows_only_king_moves() {
    let mut state = GameState::from_fen("4r1k1/8/8/8/8/5n2/8/R3K3 w - - 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(state.in_check());
    assert_eq!(state.checks().len(), 2);
    assert!(!moves.is_empty());
    assert!(
        moves
            .iter()
            .all(|m| m.piece_moved().kind() == PieceKind::King)
    );
}

#[test]
fn en_passant_exposing_king_is_not_generated() {
    let mut state = GameState::from_fen(EN_PASSANT_FEN).unwrap();
    let moves = state.valid_moves();
    assert!(moves.iter().all(|m| !m.is_en_passant()));
    assert!(GameState::find_move(&moves, sq("b5"), sq("b6")).is_some());
}

#[test]
fn castling_is_never_generated() {
    let mut state = GameState::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(moves.iter().all(|m| !m.is_castle()));
    assert!(GameState::find_move(&moves, sq("e1"), sq("g1")).is_none());
    assert!(GameState::find_move(&moves, sq("e1"), sq("c1")).is_none());
}

// ── Promotion ─────────────────────────────────────────────────────────────────

#[test]
fn promotion_places_a_rook() {
    let mut state = GameState::from_fen("4k3/1P6/8/8/8/8/8/4K3 w - - 0 1").unwrap();
    let mv = play(&mut state, "b7b8");
    assert!(mv.is_pawn_promotion());
    assert_eq!(state.piece_at(sq("b8")), Some(Piece::WHITE_ROOK));

    state.undo_move();
    assert_eq!(state.piece_at(sq("b8")), None);
    assert_eq!(state.piece_at(sq("b7")), Some(Piece::WHITE_PAWN));
}

#[test]
fn promotion_blocked_while_two_rooks_remain() {
    let mut state = GameState::from_fen("4k3/1P6/8/8/8/8/8/R3K2R w - - 0 1").unwrap();
    let moves = state.valid_moves();
    assert!(moves.iter().all(|m| m.from() != sq("b7")));
}

#[test]
fn promotion_reopens_after_losing_a_rook() {
    // Bishop f1 shields the king once the queen lands on h1.
    let mut state = GameState::from_fen("4k3/1P6/8/8/8/7q/8/R3KB1R b - - 0 1").unwrap();
    play(&mut state, "h3h1");
    assert_eq!(state.board().count(Piece::WHITE_ROOK), 1);

    let mv = play(&mut state, "b7b8");
    assert!(mv.is_pawn_promotion());
    assert_eq!(state.board().count(Piece::WHITE_ROOK), 2);
}

// ── Terminal states ───────────────────────────────────────────────────────────

#[test]
fn fools_mate_is_checkmate() {
    let mut state = new_game();
    for uci in ["f2f3", "e7e5", "g2g4", "d8h4"] {
        play(&mut state, uci);
    }
    assert!(state.valid_moves().is_empty());
    assert_eq!(state.status(), GameStatus::Checkmate);
    assert_eq!(state.side_to_move(), Color::White);
}

#[test]
fn cornered_king_is_stalemate() {
    let mut state = GameState::from_fen("k7/2Q5/1K6/8/8/8/8/8 b - - 0 1").unwrap();
    assert!(state.valid_moves().is_empty());
    assert_eq!(state.status(), GameStatus::Stalemate);
}

// ── Perft ─────────────────────────────────────────────────────────────────────

#[test]
fn perft_from_start() {
    let mut state = new_game();
    assert_eq!(perft(&mut state, 1), 20);
    assert_eq!(perft(&mut state, 2), 400);
}

#[test]
fn fen_after_moves() {
    let mut state = new_game();
    play(&mut state, "e2e4");
    play(&mut state, "c7c5");
    assert_eq!(
        state.to_fen(),
        "rnbqkbnr/pp1ppppp/8/2p5/4P3/8/PPPP1PPP/RNBQKBNR w - c6 0 2"
    );
}
