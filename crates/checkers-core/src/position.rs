//! Board coordinates.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A square on the board, addressed by column `x` and row `y`.
///
/// Row 0 is the top of the board. A position may lie outside the board;
/// use [`Position::is_inside`] before indexing.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    #[inline]
    pub const fn new(x: i8, y: i8) -> Self {
        Position { x, y }
    }

    /// Returns this position shifted by the given delta.
    #[inline]
    pub const fn offset(self, (dx, dy): (i8, i8)) -> Self {
        Position::new(self.x + dx, self.y + dy)
    }

    /// Returns true if the position lies on a board of the given size.
    #[inline]
    pub const fn is_inside(self, board_size: u8) -> bool {
        let size = board_size as i8;
        self.x >= 0 && self.x < size && self.y >= 0 && self.y < size
    }

    /// Returns true for the dark squares that can hold a piece.
    #[inline]
    pub const fn is_playable(self) -> bool {
        (self.x + self.y) % 2 != 0
    }

    /// Returns the square halfway between two positions two diagonal steps apart.
    #[inline]
    pub const fn midpoint(self, other: Position) -> Self {
        Position::new((self.x + other.x) / 2, (self.y + other.y) / 2)
    }

    /// Parses algebraic notation: a column letter followed by a 1-based row
    /// number (e.g. "b6" is x = 1, y = 5).
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?.to_ascii_lowercase();
        if !file.is_ascii_lowercase() {
            return None;
        }
        let rank: u8 = chars.as_str().parse().ok()?;
        if rank == 0 || rank > 26 {
            return None;
        }
        Some(Position::new((file as u8 - b'a') as i8, rank as i8 - 1))
    }

    /// Returns the algebraic notation for this position, or raw
    /// coordinates such as `(0,127)` when no board could hold it.
    pub fn to_algebraic(self) -> String {
        self.to_string()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..26).contains(&self.x) && (0..26).contains(&self.y) {
            write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y + 1)
        } else {
            write!(f, "({},{})", self.x, self.y)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inside_board() {
        assert!(Position::new(0, 1).is_inside(8));
        assert!(Position::new(0, 5).is_inside(8));
        assert!(Position::new(7, 7).is_inside(8));
        assert!(!Position::new(0, -1).is_inside(8));
        assert!(!Position::new(0, 8).is_inside(8));
        assert!(!Position::new(-1, 3).is_inside(8));
    }

    #[test]
    fn playable_squares() {
        assert!(Position::new(1, 0).is_playable());
        assert!(Position::new(0, 5).is_playable());
        assert!(!Position::new(0, 0).is_playable());
        assert!(!Position::new(3, 5).is_playable());
    }

    #[test]
    fn midpoint() {
        assert_eq!(
            Position::new(2, 5).midpoint(Position::new(4, 3)),
            Position::new(3, 4)
        );
    }

    #[test]
    fn algebraic_round_trip() {
        assert_eq!(Position::from_algebraic("a1"), Some(Position::new(0, 0)));
        assert_eq!(Position::from_algebraic("b6"), Some(Position::new(1, 5)));
        assert_eq!(Position::from_algebraic("H8"), Some(Position::new(7, 7)));
        assert_eq!(Position::from_algebraic("c10"), Some(Position::new(2, 9)));
        assert_eq!(Position::new(4, 3).to_algebraic(), "e4");
    }

    #[test]
    fn display_falls_back_to_coordinates() {
        assert_eq!(Position::new(2, 5).to_string(), "c6");
        assert_eq!(Position::new(25, 25).to_string(), "z26");
        assert_eq!(Position::new(0, 127).to_string(), "(0,127)");
        assert_eq!(Position::new(0, 26).to_string(), "(0,26)");
        assert_eq!(Position::new(-1, 4).to_string(), "(-1,4)");
        assert_eq!(Position::new(127, 0).to_algebraic(), "(127,0)");
    }

    #[test]
    fn algebraic_rejects_garbage() {
        assert_eq!(Position::from_algebraic(""), None);
        assert_eq!(Position::from_algebraic("a0"), None);
        assert_eq!(Position::from_algebraic("1a"), None);
        assert_eq!(Position::from_algebraic("b"), None);
        assert_eq!(Position::from_algebraic("bx"), None);
    }
}
