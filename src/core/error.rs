//! Recoverable game errors.
//!
//! None of these end a game on their own: loaders skip bad lines, missing
//! files degrade to empty lists and bad menu choices reprompt. Only a closed
//! or failing terminal stops a run.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// A data line could not be parsed.
    #[error("malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// A data file is absent or unreadable.
    #[error("missing resource {}", .path.display())]
    MissingResource { path: PathBuf },

    /// A menu answer outside the allowed range.
    #[error("invalid choice: {input:?}")]
    InvalidChoice { input: String },

    /// The input source reached end of file.
    #[error("input closed")]
    InputClosed,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = GameError::MalformedRecord { line: 3, reason: "bad number".to_string() };
        assert_eq!(err.to_string(), "malformed record on line 3: bad number");

        let err = GameError::MissingResource { path: PathBuf::from("riddles.txt") };
        assert_eq!(err.to_string(), "missing resource riddles.txt");

        let err = GameError::InvalidChoice { input: "x".to_string() };
        assert_eq!(err.to_string(), "invalid choice: \"x\"");
    }

    #[test]
    fn test_from_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
    }
}
