//! Leaf-node counting over make/undo, for checking the move generator
//! against known totals.

use crate::state::GameState;

/// Count the positions reachable in exactly `depth` plies.
///
/// Depth 0 counts the current position. At depth 1 the legal move list is
/// counted without playing the moves. Every move made is undone, so `state`
/// ends where it started.
pub fn perft(state: &mut GameState, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = state.valid_moves();

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in moves {
        state.make_move(mv);
        nodes += perft(state, depth - 1);
        state.undo_move();
    }
    nodes
}

/// Run perft with per-move breakdown.
///
/// Returns `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(state: &mut GameState, depth: usize) -> Vec<(String, u64)> {
    let moves = state.valid_moves();
    let mut results: Vec<(String, u64)> = moves
        .into_iter()
        .map(|mv| {
            state.make_move(mv);
            let count = if depth <= 1 { 1 } else { perft(state, depth - 1) };
            state.undo_move();
            (mv.to_coordinate_notation(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
