//! Core types for checkers.
//!
//! This crate provides the fundamental types used across the checkers engine:
//! - [`Piece`], [`PieceKind`], [`PieceId`] and [`Color`] for piece representation
//! - [`Position`] and [`Direction`] for board geometry
//! - [`Player`] for the two participants
//! - [`Board`] and [`Cell`] for piece placement, with a plain-text diagram format

mod board;
mod color;
mod direction;
mod piece;
mod player;
mod position;

pub use board::{Board, Cell, DiagramError};
pub use color::Color;
pub use direction::Direction;
pub use piece::{Piece, PieceId, PieceKind};
pub use player::Player;
pub use position::Position;
