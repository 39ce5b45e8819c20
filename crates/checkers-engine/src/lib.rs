//! Checkers rules engine.
//!
//! This crate provides:
//! - [`movegen`] - normal moves and exhaustive jump-chain search with the
//!   forced-capture and longest-chain rules
//! - [`Game`] - turn management, move execution, promotion and win detection
//! - [`GameEvent`] - the ordered events produced by each move
//! - [`GameView`] - a serializable snapshot for transport and storage
//!
//! # Concurrency
//!
//! A [`Game`] is plain owned data with no interior locking. A move performs
//! several board updates in sequence, so a game shared between threads must
//! sit behind one lock (or one owning task) per game.
//!
//! # Example
//!
//! ```
//! use checkers_core::{Color, Player};
//! use checkers_engine::Game;
//!
//! let players = [
//!     Player::new(Color::Black, "Alice"),
//!     Player::new(Color::White, "Bob"),
//! ];
//! let mut game = Game::new(8, players).unwrap();
//! game.start();
//!
//! let movable = game.movable_pieces(Color::Black);
//! assert_eq!(movable.len(), 4);
//!
//! let piece = movable[0].piece.id;
//! let path = game.legal_moves(piece)[0].clone();
//! let events = game.move_piece(piece, &path).unwrap();
//! assert_eq!(events.len(), 1);
//! assert_eq!(game.current_player().name, "Bob");
//! ```

mod error;
mod event;
mod game;
pub mod movegen;
mod view;

pub use error::{GameError, MoveError};
pub use event::GameEvent;
pub use game::{Game, DEFAULT_BOARD_SIZE};
pub use movegen::{MovablePiece, Path};
pub use view::{CellView, GameView};
