//! Serializable snapshot of a game for transport and storage layers.

use crate::{Game, GameEvent, MovablePiece};
use checkers_core::{Piece, Player, Position};
use serde::{Deserialize, Serialize};

/// One square of the snapshot board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    pub position: Position,
    pub piece: Option<Piece>,
}

/// A denormalized, owned copy of everything a client needs to draw the
/// game and offer the next move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    pub board_size: u8,
    pub cells: Vec<CellView>,
    pub players: Vec<Player>,
    pub current_player: Player,
    pub winner: Option<Player>,
    /// Pieces the player on move may pick, forced capture applied.
    pub movable_pieces: Vec<MovablePiece>,
    /// Messages for the events of the last move, plus the result once decided.
    pub notifications: Vec<String>,
}

impl GameView {
    /// Captures the current state of `game`, attaching notifications for
    /// `events`.
    pub fn new(game: &Game, events: &[GameEvent]) -> Self {
        let board = game.board();
        let current_player = game.current_player().clone();
        let winner = game.winner().cloned();

        let mut notifications: Vec<String> = events.iter().map(ToString::to_string).collect();
        if let Some(w) = &winner {
            notifications.push(format!("{w} WINS!"));
        }

        GameView {
            board_size: board.size(),
            cells: board
                .cells()
                .iter()
                .map(|c| CellView {
                    position: c.position,
                    piece: c.piece,
                })
                .collect(),
            players: game.players().to_vec(),
            movable_pieces: game.movable_pieces(current_player.color),
            current_player,
            winner,
            notifications,
        }
    }
}
