//! Game state: the board plus every history log, and the legality rules
//! that tie the analyzer and the generator together.

use std::fmt::Write as _;

use tracing::{debug, trace};

use crate::attacks::{self, Check, Pin};
use crate::board::Board;
use crate::castle_rights::CastleRights;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::movegen::{self, GenContext};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Outcome of the most recent [`GameState::valid_moves`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Checkmate,
    Stalemate,
}

/// Complete mutable game state.
///
/// Callers alternate [`valid_moves`](Self::valid_moves) with
/// [`make_move`](Self::make_move) or [`undo_move`](Self::undo_move), and only
/// pass moves taken from the most recent legal move list.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    /// King squares, indexed by [`Color::index()`].
    king_squares: [Square; Color::COUNT],
    in_check: bool,
    pins: Vec<Pin>,
    checks: Vec<Check>,
    en_passant: Option<Square>,
    /// One entry per ply plus the initial one.
    en_passant_log: Vec<Option<Square>>,
    castle_rights: CastleRights,
    /// One entry per ply plus the initial one.
    castle_rights_log: Vec<CastleRights>,
    move_log: Vec<Move>,
    checkmate: bool,
    stalemate: bool,
}

impl GameState {
    /// Start a new game from the standard position, White to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::starting_position(),
            side_to_move: Color::White,
            king_squares: [Square::new(7, 4), Square::new(0, 4)],
            in_check: false,
            pins: Vec::new(),
            checks: Vec::new(),
            en_passant: None,
            en_passant_log: vec![None],
            castle_rights: CastleRights::NONE,
            castle_rights_log: vec![CastleRights::NONE],
            move_log: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    /// Build a game with no history from an arbitrary validated board.
    ///
    /// The side not to move must not be in check, or its king could be
    /// captured.
    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        en_passant: Option<Square>,
    ) -> Result<GameState, BoardError> {
        board.validate()?;
        let mut king_squares = [Square::new(0, 0); Color::COUNT];
        for color in Color::ALL {
            king_squares[color.index()] =
                board
                    .find_king(color)
                    .ok_or(BoardError::InvalidKingCount {
                        color: color.name(),
                        count: 0,
                    })?;
        }
        let them = !side_to_move;
        if attacks::square_under_attack(&board, king_squares[them.index()], them) {
            return Err(BoardError::OpponentInCheck { color: them.name() });
        }
        Ok(GameState {
            board,
            side_to_move,
            king_squares,
            en_passant,
            en_passant_log: vec![en_passant],
            ..GameState::new()
        })
    }

    /// Discard the game and return to the starting position.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    // --- Accessors ---

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board.piece_at(sq)
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Whether the side to move was in check at the last legality query.
    #[inline]
    pub fn in_check(&self) -> bool {
        self.in_check
    }

    /// Pins found at the last legality query.
    #[inline]
    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    /// Checks found at the last legality query.
    #[inline]
    pub fn checks(&self) -> &[Check] {
        &self.checks
    }

    /// Square a pawn skipped on the previous ply, if any.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn castle_rights(&self) -> CastleRights {
        self.castle_rights
    }

    #[inline]
    pub fn move_log(&self) -> &[Move] {
        &self.move_log
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    pub fn status(&self) -> GameStatus {
        if self.checkmate {
            GameStatus::Checkmate
        } else if self.stalemate {
            GameStatus::Stalemate
        } else {
            GameStatus::Ongoing
        }
    }

    /// Pieces of `color` captured so far, in capture order.
    pub fn captured_pieces(&self, color: Color) -> Vec<Piece> {
        self.move_log
            .iter()
            .filter_map(Move::piece_captured)
            .filter(|piece| piece.color() == color)
            .collect()
    }

    /// Move log as numbered move pairs, e.g. `1. e4 e5 2. Nf3`.
    pub fn history_text(&self) -> String {
        let mut out = String::new();
        for (i, pair) in self.move_log.chunks(2).enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{}. {}", i + 1, pair[0]);
            if let Some(reply) = pair.get(1) {
                let _ = write!(out, " {reply}");
            }
        }
        out
    }

    // --- Legality ---

    /// Compute the legal moves for the side to move.
    ///
    /// Refreshes the check and pin state and the checkmate/stalemate flags on
    /// every call.
    ///
    /// In single check, an en passant capture of the checking pawn counts as
    /// resolving the check even though it lands beside the checker.
    pub fn valid_moves(&mut self) -> Vec<Move> {
        let us = self.side_to_move;
        let king_sq = self.king_square(us);
        let analysis = attacks::analyze(&self.board, king_sq, us);
        self.in_check = analysis.in_check;
        self.pins = analysis.pins;
        self.checks = analysis.checks;

        let ctx = GenContext {
            board: &self.board,
            side: us,
            king_sq,
            en_passant: self.en_passant,
            pins: &self.pins,
        };

        let moves = match self.checks.as_slice() {
            [] => movegen::pseudo_legal_moves(&ctx),
            [check] => {
                let targets = self.check_resolution_squares(king_sq, check);
                let mut moves = movegen::pseudo_legal_moves(&ctx);
                moves.retain(|mv| {
                    mv.piece_moved().kind() == PieceKind::King
                        || targets.contains(&mv.to())
                        || (mv.is_en_passant() && mv.en_passant_victim() == check.attacker)
                });
                moves
            }
            _ => {
                // Double check: only the king can move.
                let mut moves = Vec::new();
                movegen::gen_king(&ctx, king_sq, &mut moves);
                moves
            }
        };

        if moves.is_empty() {
            self.checkmate = self.in_check;
            self.stalemate = !self.in_check;
            debug!(
                side = us.name(),
                checkmate = self.checkmate,
                stalemate = self.stalemate,
                "no legal moves"
            );
        } else {
            self.checkmate = false;
            self.stalemate = false;
        }
        self.debug_assert_invariants();
        moves
    }

    /// Squares a non-king piece may move to in order to answer `check`: the
    /// checker's square, plus the squares between it and the king when the
    /// checker slides.
    fn check_resolution_squares(&self, king_sq: Square, check: &Check) -> Vec<Square> {
        let attacker = self.board.piece_at(check.attacker).map(Piece::kind);
        if attacker == Some(PieceKind::Knight) {
            return vec![check.attacker];
        }
        let mut squares = Vec::with_capacity(7);
        for distance in 1..Square::SIZE as i8 {
            let Some(sq) = king_sq.step(check.direction, distance) else {
                break;
            };
            squares.push(sq);
            if sq == check.attacker {
                break;
            }
        }
        squares
    }

    /// Find the move in `moves` joining `from` to `to`, matched by identity.
    pub fn find_move(moves: &[Move], from: Square, to: Square) -> Option<Move> {
        let id = Move::id_of(from, to);
        moves.iter().find(|mv| mv.id() == id).copied()
    }

    // --- Make / undo ---

    /// Execute `mv`, which must come from the latest [`valid_moves`](Self::valid_moves).
    ///
    /// Does not refresh checkmate/stalemate; call `valid_moves` again.
    pub fn make_move(&mut self, mv: Move) {
        let us = mv.color();
        debug_assert_eq!(us, self.side_to_move, "move for the wrong side");

        let placed = if mv.is_pawn_promotion() {
            Piece::new(PieceKind::Rook, us)
        } else {
            mv.piece_moved()
        };
        self.board.clear(mv.from());
        self.board.set(mv.to(), Some(placed));

        if mv.piece_moved().kind() == PieceKind::King {
            self.king_squares[us.index()] = mv.to();
        }

        if mv.is_en_passant() {
            self.board.clear(mv.en_passant_victim());
        }

        let double_push = mv.piece_moved().kind() == PieceKind::Pawn
            && mv.from().row().abs_diff(mv.to().row()) == 2;
        self.en_passant = if double_push {
            Some(Square::new(
                (mv.from().row() + mv.to().row()) / 2,
                mv.from().col(),
            ))
        } else {
            None
        };
        self.en_passant_log.push(self.en_passant);

        self.castle_rights = self.castle_rights.updated_after(&mv);
        self.castle_rights_log.push(self.castle_rights);

        self.move_log.push(mv);
        self.side_to_move = !self.side_to_move;
        trace!(mv = %mv, ply = self.move_log.len(), "made move");
        self.debug_assert_invariants();
    }

    /// Take back the last move. Returns it, or `None` if there is no history.
    ///
    /// Clears checkmate/stalemate; call `valid_moves` to re-derive them.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_log.pop()?;

        self.board.set(mv.from(), Some(mv.piece_moved()));
        self.board.set(mv.to(), mv.piece_captured());

        if mv.piece_moved().kind() == PieceKind::King {
            self.king_squares[mv.color().index()] = mv.from();
        }

        if mv.is_en_passant() {
            self.board.clear(mv.to());
            self.board.set(mv.en_passant_victim(), mv.piece_captured());
        }

        self.en_passant_log.pop();
        self.en_passant = self.en_passant_log.last().copied().flatten();
        self.castle_rights_log.pop();
        self.castle_rights = self.castle_rights_log.last().copied().unwrap_or_default();

        self.side_to_move = !self.side_to_move;
        self.checkmate = false;
        self.stalemate = false;
        trace!(mv = %mv, ply = self.move_log.len(), "undid move");
        self.debug_assert_invariants();
        Some(mv)
    }

    fn debug_assert_invariants(&self) {
        debug_assert_eq!(self.en_passant_log.len(), self.move_log.len() + 1);
        debug_assert_eq!(self.castle_rights_log.len(), self.move_log.len() + 1);
        debug_assert!(!(self.checkmate && self.stalemate));
        for color in Color::ALL {
            debug_assert_eq!(
                self.board.piece_at(self.king_square(color)),
                Some(Piece::new(PieceKind::King, color)),
                "{} king cache out of sync",
                color.name()
            );
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
