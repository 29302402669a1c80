//! Console command parsing.

use rookgate_core::Square;

use crate::error::ConsoleError;

/// A session option assignment from `set <name> <value>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the board after every move.
    EchoBoard(bool),
    /// Deepest `perft` the session will run.
    MaxPerftDepth(usize),
}

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- start a fresh game.
    New,
    /// `fen` -- print the current position, or load one with `fen <FEN>`.
    Fen(Option<String>),
    /// `moves` -- list the legal moves.
    Moves,
    /// `move e2e4` or `move e2 e4` -- play a move.
    Move { from: Square, to: Square },
    /// `undo` -- take back the last move.
    Undo,
    /// `board` -- print the board.
    Board,
    /// `log` -- print the move history.
    Log,
    /// `perft <depth>` -- count leaf nodes per root move.
    Perft(usize),
    /// `set <option> <value>` -- change a session option.
    Set(SessionOption),
    /// `quit` -- leave the session.
    Quit,
}

/// Parse a single non-empty line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ConsoleError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some((&head, args)) = tokens.split_first() else {
        return Err(ConsoleError::UnknownCommand {
            command: String::new(),
        });
    };

    match head {
        "new" => Ok(Command::New),
        "fen" => Ok(Command::Fen((!args.is_empty()).then(|| args.join(" ")))),
        "moves" => Ok(Command::Moves),
        "move" => parse_move(args),
        "undo" => Ok(Command::Undo),
        "board" => Ok(Command::Board),
        "log" => Ok(Command::Log),
        "perft" => parse_perft(args),
        "set" => parse_set(args),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(ConsoleError::UnknownCommand {
            command: other.to_string(),
        }),
    }
}

/// Accepts `e2e4` as one token or `e2 e4` as two.
fn parse_move(args: &[&str]) -> Result<Command, ConsoleError> {
    let (from, to) = match args {
        [joined] if joined.len() == 4 && joined.is_ascii() => (&joined[0..2], &joined[2..4]),
        [from, to, ..] => (*from, *to),
        [other] => {
            return Err(ConsoleError::InvalidSquare {
                value: other.to_string(),
            });
        }
        [] => return Err(ConsoleError::MissingArgument { command: "move" }),
    };
    Ok(Command::Move {
        from: parse_square(from)?,
        to: parse_square(to)?,
    })
}

fn parse_square(s: &str) -> Result<Square, ConsoleError> {
    Square::from_algebraic(s).ok_or_else(|| ConsoleError::InvalidSquare {
        value: s.to_string(),
    })
}

fn parse_perft(args: &[&str]) -> Result<Command, ConsoleError> {
    let value = args
        .first()
        .ok_or(ConsoleError::MissingArgument { command: "perft" })?;
    value
        .parse::<usize>()
        .map(Command::Perft)
        .map_err(|_| ConsoleError::InvalidDepth {
            value: value.to_string(),
        })
}

/// Parse `set <name> <value>`. Names are case-insensitive.
fn parse_set(args: &[&str]) -> Result<Command, ConsoleError> {
    let [name, value, ..] = args else {
        return Err(ConsoleError::MissingArgument { command: "set" });
    };

    let option = match name.to_ascii_lowercase().as_str() {
        "echo_board" => {
            let on = match value.to_ascii_lowercase().as_str() {
                "true" | "on" | "1" => true,
                "false" | "off" | "0" => false,
                _ => {
                    return Err(ConsoleError::InvalidOptionValue {
                        name: "echo_board",
                        value: value.to_string(),
                    });
                }
            };
            SessionOption::EchoBoard(on)
        }
        "max_perft_depth" => {
            let depth = value
                .parse::<usize>()
                .map_err(|_| ConsoleError::InvalidOptionValue {
                    name: "max_perft_depth",
                    value: value.to_string(),
                })?;
            SessionOption::MaxPerftDepth(depth)
        }
        _ => {
            return Err(ConsoleError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}
