//! Diagonal direction tables.

use crate::{Color, PieceKind, Position};

/// One of the four diagonals, carrying a single-step move delta and a
/// double-step jump delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Direction {
    /// All four diagonals.
    pub const ALL: [Direction; 4] = [
        Direction::TopLeft,
        Direction::TopRight,
        Direction::BottomLeft,
        Direction::BottomRight,
    ];

    const UP: [Direction; 2] = [Direction::TopLeft, Direction::TopRight];
    const DOWN: [Direction; 2] = [Direction::BottomLeft, Direction::BottomRight];

    /// Returns the `(dx, dy)` of a single diagonal step.
    #[inline]
    pub const fn move_delta(self) -> (i8, i8) {
        match self {
            Direction::TopLeft => (-1, -1),
            Direction::TopRight => (1, -1),
            Direction::BottomLeft => (-1, 1),
            Direction::BottomRight => (1, 1),
        }
    }

    /// Returns the `(dx, dy)` of a jump over the adjacent square.
    #[inline]
    pub const fn jump_delta(self) -> (i8, i8) {
        let (dx, dy) = self.move_delta();
        (dx * 2, dy * 2)
    }

    /// The adjacent square in this direction.
    #[inline]
    pub const fn step(self, from: Position) -> Position {
        from.offset(self.move_delta())
    }

    /// The landing square of a jump in this direction.
    #[inline]
    pub const fn jump(self, from: Position) -> Position {
        from.offset(self.jump_delta())
    }

    /// The two forward diagonals for men of the given color.
    #[inline]
    pub const fn forward(color: Color) -> &'static [Direction] {
        if color.forward() < 0 {
            &Self::UP
        } else {
            &Self::DOWN
        }
    }

    /// The diagonals a piece may take a normal step along.
    #[inline]
    pub const fn for_step(kind: PieceKind, color: Color) -> &'static [Direction] {
        match kind {
            PieceKind::Man => Self::forward(color),
            PieceKind::King => &Self::ALL,
        }
    }
}
