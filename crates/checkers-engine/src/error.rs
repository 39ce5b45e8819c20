//! Error types for game setup and move execution.

use checkers_core::{Color, PieceId, Position};
use thiserror::Error;

/// Errors that can occur when creating a game.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("invalid board size {0}: expected an even size between 4 and 26")]
    InvalidBoardSize(u8),

    #[error("both players are assigned {0}")]
    DuplicateColor(Color),
}

/// Reasons a move is rejected.
///
/// A rejected move never changes the game: the board, the piece sets and
/// the turn are left exactly as they were, and no events are produced.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error("piece {0} is not on the board")]
    InvalidPieceReference(PieceId),

    #[error("piece {piece} belongs to the player not on move ({expected} to move)")]
    WrongTurn { piece: PieceId, expected: Color },

    #[error("path is not one of the legal moves for this piece")]
    IllegalPath,

    #[error("position {0} is off the board")]
    OutOfBounds(Position),

    #[error("game has already ended")]
    GameOver,
}
