//! Line-oriented text console for playing rookgate games.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption};
pub use error::ConsoleError;
pub use session::{ConsoleSession, SessionConfig};
