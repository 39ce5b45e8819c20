//! Turn management and move execution.
//!
//! [`Game`] owns the board, the two players and each side's set of piece
//! ids. The board is the single store of pieces; the piece sets only hold
//! ids and are updated by the same helper that takes a piece off the board,
//! so the two never disagree.

use crate::movegen::{self, is_jump, MovablePiece, Path};
use crate::{GameError, GameEvent, MoveError};
use checkers_core::{Board, Color, Piece, PieceId, Player, Position};
use std::collections::BTreeSet;
use tracing::{debug, info};

/// Board size used by [`Game::default`].
pub const DEFAULT_BOARD_SIZE: u8 = 8;

/// A game of checkers between two players.
///
/// The first player in the array moves first. Moves are validated against
/// the legal moves of the side to move; a rejected move changes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    /// Index into `players` of the side to move.
    current: usize,
    /// Index into `players` of the winner, once decided.
    winner: Option<usize>,
    /// Piece ids owned by each color, indexed by [`Color::index`].
    pieces: [BTreeSet<PieceId>; 2],
}

impl Default for Game {
    /// A started 8×8 game with "Player 1" on Black and "Player 2" on White.
    fn default() -> Self {
        let mut game = Game {
            board: Board::new(DEFAULT_BOARD_SIZE),
            players: [
                Player::new(Color::Black, "Player 1"),
                Player::new(Color::White, "Player 2"),
            ],
            current: 0,
            winner: None,
            pieces: Default::default(),
        };
        game.start();
        game
    }
}

fn validate_setup(board_size: u8, players: &[Player; 2]) -> Result<(), GameError> {
    if !Board::is_valid_size(board_size) {
        return Err(GameError::InvalidBoardSize(board_size));
    }
    if players[0].color == players[1].color {
        return Err(GameError::DuplicateColor(players[0].color));
    }
    Ok(())
}

impl Game {
    /// Creates a game with an empty board. Call [`Game::start`] to set up
    /// the pieces.
    pub fn new(board_size: u8, players: [Player; 2]) -> Result<Self, GameError> {
        validate_setup(board_size, &players)?;
        Ok(Game {
            board: Board::new(board_size),
            players,
            current: 0,
            winner: None,
            pieces: Default::default(),
        })
    }

    /// Creates a game from an arbitrary board with `to_move` on turn.
    ///
    /// The winner is computed immediately, so a position that is already
    /// decided starts out as game over.
    pub fn from_board(board: Board, players: [Player; 2], to_move: Color) -> Result<Self, GameError> {
        validate_setup(board.size(), &players)?;
        let current = if players[0].color == to_move { 0 } else { 1 };
        let mut game = Game {
            board,
            players,
            current,
            winner: None,
            pieces: Default::default(),
        };
        game.rebuild_piece_sets();
        game.check_win();
        Ok(game)
    }

    /// Sets up the starting position and gives the turn to the first player.
    ///
    /// Calling this again restarts the game from scratch; piece ids are
    /// reissued from zero.
    pub fn start(&mut self) {
        self.board = Board::standard(self.board.size());
        self.rebuild_piece_sets();
        self.current = 0;
        self.winner = None;
        debug!(
            size = self.board.size(),
            first = %self.players[0],
            "game started"
        );
    }

    fn rebuild_piece_sets(&mut self) {
        for color in Color::ALL {
            self.pieces[color.index()] = self.board.pieces_of(color).map(|(_, p)| p.id).collect();
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Both players, in turn order.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player on move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Returns the winner, if the game has been decided.
    pub fn winner(&self) -> Option<&Player> {
        self.winner.map(|i| &self.players[i])
    }

    pub fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    #[inline]
    fn index_of(&self, color: Color) -> usize {
        if self.players[0].color == color {
            0
        } else {
            1
        }
    }

    /// Returns the player playing `color`.
    pub fn player(&self, color: Color) -> &Player {
        &self.players[self.index_of(color)]
    }

    /// Returns the player playing against `color`.
    pub fn opponent(&self, color: Color) -> &Player {
        self.player(color.opposite())
    }

    /// Returns the ids of the pieces still in play for `color`.
    pub fn player_pieces(&self, color: Color) -> &BTreeSet<PieceId> {
        &self.pieces[color.index()]
    }

    /// Looks up a piece still in play by id.
    pub fn piece(&self, id: PieceId) -> Option<Piece> {
        self.position_of(id)
            .and_then(|pos| self.board.piece_at(pos))
            .copied()
    }

    pub fn position_of(&self, id: PieceId) -> Option<Position> {
        self.board.find(id)
    }

    pub fn piece_at(&self, pos: Position) -> Option<Piece> {
        self.board.piece_at(pos).copied()
    }

    /// Returns the pieces of `color` that may move, with forced capture
    /// applied across the whole side.
    pub fn movable_pieces(&self, color: Color) -> Vec<MovablePiece> {
        movegen::movable_pieces(&self.board, color)
    }

    /// Returns the paths the piece may play.
    ///
    /// A piece whose side has a longer capture available elsewhere gets no
    /// paths at all. Pieces of the side not on move still get their paths.
    pub fn legal_moves(&self, id: PieceId) -> Vec<Path> {
        let Some(piece) = self.piece(id) else {
            return Vec::new();
        };
        let movable = self.movable_pieces(piece.color);
        match movable.iter().find(|m| m.piece.id == id) {
            Some(m) => movegen::legal_moves(&self.board, m.position),
            None => Vec::new(),
        }
    }

    /// Returns true if `move_piece(id, path)` would be accepted.
    pub fn is_legal_path(&self, id: PieceId, path: &[Position]) -> bool {
        self.validate_move(id, path).is_ok()
    }

    /// Plays `path` with the piece `id`.
    ///
    /// Every hop is executed in order, capturing the piece jumped on each
    /// one. Promotion is only checked where the path ends, then the turn
    /// passes and the winner is recomputed. On error nothing changes.
    pub fn move_piece(&mut self, id: PieceId, path: &[Position]) -> Result<Vec<GameEvent>, MoveError> {
        let from = self
            .validate_move(id, path)
            .inspect_err(|e| debug!(piece = %id, error = %e, "move rejected"))?;

        let mut events = Vec::with_capacity(path.len() + 2);
        let mut at = from;
        for &to in path {
            if is_jump(at, to) {
                let over = at.midpoint(to);
                if let Some(piece) = self.remove_piece(over) {
                    events.push(GameEvent::PieceCaptured {
                        piece,
                        position: over,
                    });
                }
            }
            let moved = self.board.relocate(at, to);
            debug_assert!(moved, "validated hop {at} -> {to} was blocked");
            at = to;
        }

        if let Some(event) = self.promote_if_due(at) {
            events.push(event);
        }
        debug!(piece = %id, from = %from, to = %at, hops = path.len(), "move played");

        events.push(self.switch_player());
        self.check_win();
        Ok(events)
    }

    fn validate_move(&self, id: PieceId, path: &[Position]) -> Result<Position, MoveError> {
        if self.winner.is_some() {
            return Err(MoveError::GameOver);
        }

        let from = self
            .board
            .find(id)
            .ok_or(MoveError::InvalidPieceReference(id))?;
        let piece = self
            .board
            .piece_at(from)
            .ok_or(MoveError::InvalidPieceReference(id))?;

        let expected = self.current_player().color;
        if piece.color != expected {
            return Err(MoveError::WrongTurn {
                piece: id,
                expected,
            });
        }

        if let Some(&outside) = path.iter().find(|&&p| !self.board.is_inside(p)) {
            return Err(MoveError::OutOfBounds(outside));
        }

        if !self.legal_moves(id).iter().any(|legal| legal.as_slice() == path) {
            return Err(MoveError::IllegalPath);
        }

        Ok(from)
    }

    /// Takes a piece off the board and out of its owner's piece set.
    fn remove_piece(&mut self, at: Position) -> Option<Piece> {
        let piece = self.board.remove(at)?;
        self.pieces[piece.color.index()].remove(&piece.id);
        Some(piece)
    }

    fn promote_if_due(&mut self, at: Position) -> Option<GameEvent> {
        let size = self.board.size();
        let piece = self.board.piece_at_mut(at)?;
        if at.y != piece.color.promotion_row(size) || !piece.promote() {
            return None;
        }
        Some(GameEvent::PiecePromoted {
            piece: *piece,
            position: at,
        })
    }

    fn switch_player(&mut self) -> GameEvent {
        self.current = 1 - self.current;
        GameEvent::TurnChanged {
            player: self.current_player().clone(),
        }
    }

    /// Recomputes the winner.
    ///
    /// The side on move loses if it has no movable piece; otherwise a side
    /// with no pieces left loses. If neither holds there is no winner.
    pub fn check_win(&mut self) -> Option<&Player> {
        self.winner = None;

        if self.movable_pieces(self.current_player().color).is_empty() {
            self.winner = Some(1 - self.current);
        } else if let Some(loser) = self
            .players
            .iter()
            .position(|p| self.pieces[p.color.index()].is_empty())
        {
            self.winner = Some(1 - loser);
        }

        if let Some(i) = self.winner {
            info!(winner = %self.players[i], "game over");
        }
        self.winner()
    }
}
