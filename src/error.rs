//! Error types for the ttt-rewards crate.

use thiserror::Error;

use crate::core::Player;

/// Main error type for the crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: cell ({row}, {col}) is already occupied")]
    IllegalMove { row: usize, col: usize },

    #[error("player {player} cannot make two moves in a row")]
    OutOfTurn { player: Player },

    #[error("no legal moves available: the board is full")]
    NoLegalMoves,

    #[error("invalid input: {reason}")]
    InvalidInput { reason: String },

    #[error("cell ({row}, {col}) is out of bounds (row and column must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("encoding error: {0}")]
    Encoding(#[from] bincode::Error),
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
