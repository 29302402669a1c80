//! Rules engine for a chess variant without castling, where pawns promote
//! only to rooks: board representation, check and pin analysis, legal move
//! generation, and make/undo game state.

mod attacks;
mod board;
mod castle_rights;
mod chess_move;
mod color;
mod direction;
mod error;
mod fen;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod square;
mod state;

pub use attacks::{Analysis, Check, Pin, analyze, square_under_attack};
pub use board::{Board, PrettyBoard};
pub use castle_rights::{CastleRights, CastleSide};
pub use chess_move::Move;
pub use color::Color;
pub use direction::Direction;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
pub use state::{GameState, GameStatus};

/// Start a new game from the standard position.
pub fn new_game() -> GameState {
    GameState::new()
}
