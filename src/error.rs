//! Error types for the noughts crate

use thiserror::Error;

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    InvalidMove { row: usize, col: usize },

    #[error("position ({row}, {col}) is out of bounds (rows and columns must be 0-2)")]
    InvalidPosition { row: usize, col: usize },

    #[error("no moves available: the game is already over")]
    NoMovesAvailable,

    #[error("game already over")]
    GameOver,

    #[error("utility is undefined for a non-terminal board '{board}'")]
    NotTerminal { board: String },

    #[error("invalid board length: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("unreachable board '{board}': {reason}")]
    UnreachableBoard { board: String, reason: String },

    #[error("invalid search kind '{input}'. Expected one of: {expected}")]
    ParseSearchKind { input: String, expected: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
