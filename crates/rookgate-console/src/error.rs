//! Console errors.

use rookgate_core::FenError;

/// Errors that can occur while reading or executing console commands.
#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    /// The first word of the line is not a known command.
    #[error("unknown command: {command}")]
    UnknownCommand {
        /// The unrecognized command word.
        command: String,
    },

    /// A command was given without a required argument.
    #[error("{command}: missing argument")]
    MissingArgument {
        /// The command that needs the argument.
        command: &'static str,
    },

    /// A square name could not be parsed.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The text that failed to parse.
        value: String,
    },

    /// The perft depth could not be parsed.
    #[error("invalid depth: {value}")]
    InvalidDepth {
        /// The depth string that failed to parse.
        value: String,
    },

    /// The perft depth is larger than the configured limit.
    #[error("depth {depth} exceeds the limit of {max}")]
    DepthTooLarge {
        /// Requested depth.
        depth: usize,
        /// Configured `max_perft_depth`.
        max: usize,
    },

    /// `set` named an option the session does not have.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name as typed.
        name: String,
    },

    /// `set` gave a value the option cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// The move is not in the current legal move list.
    #[error("illegal move: {mv}")]
    IllegalMove {
        /// The move as typed.
        mv: String,
    },

    /// `undo` was issued with an empty move log.
    #[error("no move to undo")]
    NothingToUndo,

    /// Failed to load a position from FEN.
    #[error("invalid FEN: {source}")]
    InvalidFen {
        /// The underlying FEN error.
        #[from]
        source: FenError,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
