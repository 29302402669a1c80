//! FEN parsing and serialization for setting up positions.
//!
//! The castling field is accepted for compatibility with standard FEN and
//! then discarded, since castling is disabled. The move counters are
//! optional and unused.

use std::str::FromStr;

use crate::board::Board;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;
use crate::state::GameState;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w - - 0 1";

/// Parse the piece placement field of a FEN string. No structural validation.
pub(crate) fn parse_board(placement: &str) -> Result<Board, FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        let mut col: usize = 0;
        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                col += digit as usize;
                continue;
            }

            let piece = Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
            if col >= 8 {
                return Err(FenError::BadRankLength {
                    rank_index,
                    length: col + 1,
                });
            }
            board.set(Square::new(rank_index as u8, col as u8), Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: col,
            });
        }
    }
    Ok(board)
}

fn parse_castling(field: &str) -> Result<(), FenError> {
    if field == "-" {
        return Ok(());
    }
    match field.chars().find(|c| !matches!(c, 'K' | 'Q' | 'k' | 'q')) {
        Some(character) => Err(FenError::InvalidCastlingChar { character }),
        None => Ok(()),
    }
}

fn parse_en_passant(field: &str, side_to_move: Color) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassant {
        found: field.to_string(),
    };
    let sq = Square::from_algebraic(field).ok_or_else(invalid)?;
    // The skipped square lies one row behind the opponent's pawn start row.
    let expected_row = (side_to_move.flip().pawn_start_row() as i8 + side_to_move.flip().forward()) as u8;
    if sq.row() != expected_row {
        return Err(invalid());
    }
    Ok(Some(sq))
}

fn parse_counter(field: Option<&&str>, name: &'static str) -> Result<(), FenError> {
    match field {
        Some(s) => s
            .parse::<u16>()
            .map(|_| ())
            .map_err(|_| FenError::InvalidMoveCounter {
                field: name,
                found: s.to_string(),
            }),
        None => Ok(()),
    }
}

impl FromStr for Board {
    type Err = FenError;

    /// Parse and validate a piece placement field, e.g. `8/8/8/8/8/8/8/K6k`.
    fn from_str(placement: &str) -> Result<Board, FenError> {
        let board = parse_board(placement)?;
        board.validate()?;
        Ok(board)
    }
}

impl Board {
    /// Serialize the piece placement to the first FEN field.
    pub fn placement_fen(&self) -> String {
        let mut out = String::with_capacity(64);
        for row in 0..Square::SIZE {
            let mut empty = 0;
            for col in 0..Square::SIZE {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(piece.fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if row < Square::SIZE - 1 {
                out.push('/');
            }
        }
        out
    }
}

impl GameState {
    /// Set up a game from a FEN string with no move history.
    ///
    /// # Errors
    ///
    /// Returns [`FenError`] if any field is malformed or the board fails
    /// validation.
    pub fn from_fen(fen: &str) -> Result<GameState, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board: Board = fields[0].parse()?;
        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };
        parse_castling(fields[2])?;
        let en_passant = parse_en_passant(fields[3], side_to_move)?;
        parse_counter(fields.get(4), "halfmove clock")?;
        parse_counter(fields.get(5), "fullmove number")?;

        GameState::from_parts(board, side_to_move, en_passant).map_err(FenError::from)
    }

    /// Serialize the current position. Castling is always `-` and the
    /// counters are derived from the move log.
    pub fn to_fen(&self) -> String {
        let ep = self
            .en_passant()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());
        format!(
            "{} {} {} {} 0 {}",
            self.board().placement_fen(),
            self.side_to_move(),
            self.castle_rights(),
            ep,
            self.move_log().len() / 2 + 1
        )
    }
}
