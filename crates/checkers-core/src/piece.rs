//! Checkers piece representation.

use crate::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The two kinds of checkers pieces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum PieceKind {
    /// Unpromoted piece; steps diagonally forward only.
    Man = 0,
    /// Promoted piece; steps diagonally in all four directions.
    King = 1,
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Man => write!(f, "Man"),
            PieceKind::King => write!(f, "King"),
        }
    }
}

/// Stable identity of a piece for the lifetime of a game.
///
/// Identifiers are handed out when pieces are placed and are never reused
/// while the board they were issued for is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PieceId(pub u32);

impl fmt::Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A piece on the board.
///
/// The board cell holding a piece is the single source of truth for its
/// kind; everything else refers to it by [`PieceId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub id: PieceId,
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    /// Creates a new man of the given color.
    #[inline]
    pub const fn man(id: PieceId, color: Color) -> Self {
        Piece {
            id,
            kind: PieceKind::Man,
            color,
        }
    }

    /// Creates a new king of the given color.
    #[inline]
    pub const fn king(id: PieceId, color: Color) -> Self {
        Piece {
            id,
            kind: PieceKind::King,
            color,
        }
    }

    #[inline]
    pub const fn is_king(&self) -> bool {
        matches!(self.kind, PieceKind::King)
    }

    /// Promotes a man to a king. Returns false if the piece was already a king.
    pub fn promote(&mut self) -> bool {
        if self.is_king() {
            return false;
        }
        self.kind = PieceKind::King;
        true
    }

    /// Returns the diagram character for this piece: lowercase for men,
    /// uppercase for kings.
    pub const fn to_char(&self) -> char {
        let c = self.color.to_char();
        match self.kind {
            PieceKind::Man => c,
            PieceKind::King => c.to_ascii_uppercase(),
        }
    }

    /// Parses a diagram character into a kind and color.
    pub const fn from_char(c: char) -> Option<(PieceKind, Color)> {
        let kind = if c.is_ascii_uppercase() {
            PieceKind::King
        } else {
            PieceKind::Man
        };
        let color = match c.to_ascii_lowercase() {
            'b' => Color::Black,
            'w' => Color::White,
            _ => return None,
        };
        Some((kind, color))
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_to_char() {
        assert_eq!(Piece::man(PieceId(0), Color::Black).to_char(), 'b');
        assert_eq!(Piece::man(PieceId(0), Color::White).to_char(), 'w');
        assert_eq!(Piece::king(PieceId(0), Color::Black).to_char(), 'B');
        assert_eq!(Piece::king(PieceId(0), Color::White).to_char(), 'W');
    }

    #[test]
    fn piece_from_char() {
        assert_eq!(Piece::from_char('b'), Some((PieceKind::Man, Color::Black)));
        assert_eq!(Piece::from_char('W'), Some((PieceKind::King, Color::White)));
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('.'), None);
    }

    #[test]
    fn promote_once() {
        let mut piece = Piece::man(PieceId(3), Color::White);
        assert!(piece.promote());
        assert!(piece.is_king());
        assert!(!piece.promote());
        assert_eq!(piece.id, PieceId(3));
    }

    #[test]
    fn display() {
        assert_eq!(
            format!("{}", Piece::king(PieceId(1), Color::Black)),
            "Black King"
        );
    }
}
