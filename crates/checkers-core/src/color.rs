//! Player color representation.

use serde::{Deserialize, Serialize};

/// The two sides in a game of checkers.
///
/// Black starts on the bottom rows and moves toward row 0; White starts on
/// the top rows and moves toward the last row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum Color {
    #[serde(alias = "black")]
    Black = 0,
    #[serde(alias = "white")]
    White = 1,
}

impl Color {
    /// Both colors, in index order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Returns the index (0 for Black, 1 for White).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row delta of a forward step (-1 for Black, +1 for White).
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::Black => -1,
            Color::White => 1,
        }
    }

    /// Returns the row on which men of this color are promoted.
    #[inline]
    pub const fn promotion_row(self, board_size: u8) -> i8 {
        match self {
            Color::Black => 0,
            Color::White => board_size as i8 - 1,
        }
    }

    /// Returns the diagram character for a man of this color.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Color::Black => 'b',
            Color::White => 'w',
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}
