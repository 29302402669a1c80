//! Interactive game session driven by text commands.

use std::io::{self, BufRead, Write};

use tracing::{debug, info, warn};

use rookgate_core::{GameState, GameStatus, Move, divide};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::ConsoleError;

/// Configuration knobs adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Print the board after every move.
    pub echo_board: bool,
    /// Deepest `perft` the session accepts.
    pub max_perft_depth: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            echo_board: false,
            max_perft_depth: 6,
        }
    }
}

/// A game plus the legal move list for its current position.
///
/// The move list is refreshed after every command that changes the
/// position, so `move` always validates against the current position.
pub struct ConsoleSession {
    state: GameState,
    moves: Vec<Move>,
    config: SessionConfig,
}

impl ConsoleSession {
    /// Create a session at the starting position with default settings.
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    pub fn with_config(config: SessionConfig) -> Self {
        let mut state = GameState::new();
        let moves = state.valid_moves();
        Self {
            state,
            moves,
            config,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Run the session on stdin/stdout until `quit` or end of input.
    pub fn run(self) -> Result<(), ConsoleError> {
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run_with(stdin.lock(), stdout.lock())
    }

    /// Run the session over arbitrary input and output streams.
    ///
    /// Command errors are reported on `output` and the loop continues. Only
    /// I/O failures end the session with an error.
    pub fn run_with<R: BufRead, W: Write>(mut self, input: R, mut output: W) -> Result<(), ConsoleError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            let result = parse_command(trimmed).and_then(|cmd| self.execute(cmd, &mut output));
            match result {
                Ok(true) => {}
                Ok(false) => break,
                Err(e @ ConsoleError::Io { .. }) => return Err(e),
                Err(e) => {
                    warn!(error = %e, "command failed");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!(plies = self.state.move_log().len(), "session finished");
        Ok(())
    }

    /// Execute one command. Returns `false` when the session should end.
    pub fn execute<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<bool, ConsoleError> {
        match cmd {
            Command::New => {
                self.state.reset();
                self.refresh(out)?;
                writeln!(out, "new game")?;
            }
            Command::Fen(None) => writeln!(out, "{}", self.state.to_fen())?,
            Command::Fen(Some(fen)) => {
                self.state = GameState::from_fen(&fen)?;
                self.refresh(out)?;
                writeln!(out, "{}", self.state.to_fen())?;
            }
            Command::Moves => {
                let mut list: Vec<String> =
                    self.moves.iter().map(Move::to_coordinate_notation).collect();
                list.sort();
                writeln!(out, "{} moves: {}", list.len(), list.join(" "))?;
            }
            Command::Move { from, to } => {
                let mv = GameState::find_move(&self.moves, from, to).ok_or_else(|| {
                    ConsoleError::IllegalMove {
                        mv: format!("{from}{to}"),
                    }
                })?;
                self.state.make_move(mv);
                writeln!(out, "played {mv}")?;
                if self.config.echo_board {
                    self.print_board(out)?;
                }
                self.refresh(out)?;
            }
            Command::Undo => {
                let mv = self.state.undo_move().ok_or(ConsoleError::NothingToUndo)?;
                writeln!(out, "undid {mv}")?;
                self.refresh(out)?;
            }
            Command::Board => self.print_board(out)?,
            Command::Log => {
                let history = self.state.history_text();
                if history.is_empty() {
                    writeln!(out, "(no moves)")?;
                } else {
                    writeln!(out, "{history}")?;
                }
            }
            Command::Perft(depth) => self.perft(depth, out)?,
            Command::Set(option) => self.apply_option(option, out)?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    /// Re-derive the legal moves and announce a finished game.
    fn refresh<W: Write>(&mut self, out: &mut W) -> Result<(), ConsoleError> {
        self.moves = self.state.valid_moves();
        match self.state.status() {
            GameStatus::Checkmate => {
                let winner = !self.state.side_to_move();
                writeln!(out, "checkmate, {} wins", winner.name())?;
            }
            GameStatus::Stalemate => writeln!(out, "stalemate")?,
            GameStatus::Ongoing if self.state.in_check() => {
                writeln!(out, "{} is in check", self.state.side_to_move().name())?;
            }
            GameStatus::Ongoing => {}
        }
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), ConsoleError> {
        writeln!(out, "{}", self.state.board().pretty())?;
        writeln!(out, "{} to move", self.state.side_to_move().name())?;
        Ok(())
    }

    fn perft<W: Write>(&mut self, depth: usize, out: &mut W) -> Result<(), ConsoleError> {
        let max = self.config.max_perft_depth;
        if depth > max {
            return Err(ConsoleError::DepthTooLarge { depth, max });
        }
        if depth == 0 {
            writeln!(out, "total: 1")?;
            return Ok(());
        }

        let results = divide(&mut self.state, depth);
        let mut total = 0u64;
        for (mv, nodes) in &results {
            writeln!(out, "{mv}: {nodes}")?;
            total += nodes;
        }
        writeln!(out, "total: {total}")?;
        debug!(depth, total, "perft finished");

        // divide leaves check and pin state from its last probe.
        self.refresh(&mut io::sink())?;
        Ok(())
    }

    fn apply_option<W: Write>(&mut self, option: SessionOption, out: &mut W) -> Result<(), ConsoleError> {
        match option {
            SessionOption::EchoBoard(on) => {
                self.config.echo_board = on;
                writeln!(out, "echo_board = {on}")?;
            }
            SessionOption::MaxPerftDepth(depth) => {
                self.config.max_perft_depth = depth;
                writeln!(out, "max_perft_depth = {depth}")?;
            }
        }
        Ok(())
    }
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self::new()
    }
}
