//! Events produced by executing a move.

use checkers_core::{Piece, Player, Position};
use std::fmt;

/// Something observable that happened while a move was applied.
///
/// [`Game::move_piece`](crate::Game::move_piece) returns events in order:
/// one `PieceCaptured` per hop, then at most one `PiecePromoted`, then at
/// most one `TurnChanged`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// An opposing piece was jumped and removed from play.
    PieceCaptured { piece: Piece, position: Position },
    /// A man finished its move on the far row and became a king.
    PiecePromoted { piece: Piece, position: Position },
    /// The turn passed to another player.
    TurnChanged { player: Player },
}

/// Formats the user-facing notification for an event.
impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::PieceCaptured { piece, position } => write!(
                f,
                "Piece Captured! {} {} ({}) was removed from the board.",
                piece.color, piece.kind, position
            ),
            GameEvent::PiecePromoted { piece, position } => write!(
                f,
                "Piece Promoted! {} piece ({}) has become a King!",
                piece.color, position
            ),
            GameEvent::TurnChanged { player } => write!(f, "Turn switched to {}", player),
        }
    }
}
