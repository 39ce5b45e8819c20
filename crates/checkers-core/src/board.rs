//! Board and cell storage, plus the plain-text diagram format.
//!
//! A diagram lists one line per row, top row (y = 0) first. Each character
//! is a square: `.` for empty, `b`/`w` for black/white men and `B`/`W` for
//! kings. Whitespace around lines is ignored and blank lines are skipped.
//!
//! ```text
//! .w.w.w.w
//! w.w.w.w.
//! .w.w.w.w
//! ........
//! ........
//! b.b.b.b.
//! .b.b.b.b
//! b.b.b.b.
//! ```

use crate::{Color, Piece, PieceId, Position};
use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a board diagram.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid board size: {0} rows (expected an even size between 4 and 26)")]
    InvalidSize(usize),

    #[error("row {row} has {found} squares, expected {expected}")]
    RowWidth {
        row: usize,
        found: usize,
        expected: usize,
    },

    #[error("unknown square character '{0}'")]
    UnknownCharacter(char),

    #[error("piece on light square {0}")]
    UnplayableSquare(Position),
}

/// A single square of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub piece: Option<Piece>,
}

/// A square grid of cells, created once with a fixed size.
///
/// The board is the only place pieces are stored; it never contains two
/// pieces with the same [`PieceId`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: u8,
    cells: Vec<Cell>,
}

impl Board {
    /// Smallest supported board.
    pub const MIN_SIZE: u8 = 4;
    /// Largest supported board; one column letter per file.
    pub const MAX_SIZE: u8 = 26;

    /// Returns true if a board of this size can be built and set up.
    #[inline]
    pub const fn is_valid_size(size: u8) -> bool {
        size >= Self::MIN_SIZE && size <= Self::MAX_SIZE && size % 2 == 0
    }

    /// Creates an empty board.
    pub fn new(size: u8) -> Self {
        let cells = (0..size as i8)
            .flat_map(|y| (0..size as i8).map(move |x| Position::new(x, y)))
            .map(|position| Cell {
                position,
                piece: None,
            })
            .collect();
        Board { size, cells }
    }

    /// Creates a board in the starting layout: `(size - 2) / 2` rows of men
    /// per side on the playable squares, White on top and Black at the bottom.
    ///
    /// Pieces receive ids in row-major order starting from zero.
    pub fn standard(size: u8) -> Self {
        let mut board = Board::new(size);
        let rows = (size as i8 - 2) / 2;
        let mut next_id = 0u32;

        for y in 0..size as i8 {
            let color = if y < rows {
                Color::White
            } else if y >= size as i8 - rows {
                Color::Black
            } else {
                continue;
            };

            for x in 0..size as i8 {
                let pos = Position::new(x, y);
                if pos.is_playable() {
                    board.place(pos, Piece::man(PieceId(next_id), color));
                    next_id += 1;
                }
            }
        }

        board
    }

    /// Parses a board diagram (see the module documentation).
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();

        let size = rows.len();
        if size > Self::MAX_SIZE as usize || !Self::is_valid_size(size as u8) {
            return Err(DiagramError::InvalidSize(size));
        }

        let mut board = Board::new(size as u8);
        let mut next_id = 0u32;

        for (y, row) in rows.iter().enumerate() {
            let squares: Vec<char> = row.chars().collect();
            if squares.len() != size {
                return Err(DiagramError::RowWidth {
                    row: y,
                    found: squares.len(),
                    expected: size,
                });
            }

            for (x, &c) in squares.iter().enumerate() {
                if c == '.' {
                    continue;
                }
                let (kind, color) = Piece::from_char(c).ok_or(DiagramError::UnknownCharacter(c))?;
                let pos = Position::new(x as i8, y as i8);
                if !pos.is_playable() {
                    return Err(DiagramError::UnplayableSquare(pos));
                }
                let id = PieceId(next_id);
                next_id += 1;
                board.place(pos, Piece { id, kind, color });
            }
        }

        Ok(board)
    }

    /// Renders the board as a diagram that [`Board::from_diagram`] accepts.
    pub fn to_diagram(&self) -> String {
        let mut out = String::with_capacity(self.cells.len() + self.size as usize);
        for row in self.cells.chunks(self.size as usize) {
            for cell in row {
                out.push(cell.piece.map_or('.', |p| p.to_char()));
            }
            out.push('\n');
        }
        out
    }

    #[inline]
    pub fn size(&self) -> u8 {
        self.size
    }

    #[inline]
    pub fn is_inside(&self, pos: Position) -> bool {
        pos.is_inside(self.size)
    }

    #[inline]
    fn index(&self, pos: Position) -> Option<usize> {
        if self.is_inside(pos) {
            Some(pos.y as usize * self.size as usize + pos.x as usize)
        } else {
            None
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    /// Returns the piece on a square, or `None` if the square is empty or
    /// off the board.
    pub fn piece_at(&self, pos: Position) -> Option<&Piece> {
        self.cell(pos).and_then(|c| c.piece.as_ref())
    }

    pub fn piece_at_mut(&mut self, pos: Position) -> Option<&mut Piece> {
        let i = self.index(pos)?;
        self.cells[i].piece.as_mut()
    }

    /// Returns true if the square is on the board and holds no piece.
    #[inline]
    pub fn is_empty(&self, pos: Position) -> bool {
        matches!(self.cell(pos), Some(Cell { piece: None, .. }))
    }

    /// Puts a piece on a square, returning whatever was there before.
    /// Off-board positions are ignored.
    pub fn place(&mut self, pos: Position, piece: Piece) -> Option<Piece> {
        let i = self.index(pos)?;
        self.cells[i].piece.replace(piece)
    }

    /// Takes the piece off a square.
    pub fn remove(&mut self, pos: Position) -> Option<Piece> {
        let i = self.index(pos)?;
        self.cells[i].piece.take()
    }

    /// Moves the piece on `from` to the empty square `to`.
    ///
    /// Returns false, leaving the board untouched, if `from` is empty or
    /// `to` is occupied or off the board.
    pub fn relocate(&mut self, from: Position, to: Position) -> bool {
        if !self.is_empty(to) {
            return false;
        }
        match self.remove(from) {
            Some(piece) => {
                self.place(to, piece);
                true
            }
            None => false,
        }
    }

    /// Finds the square holding the piece with the given id.
    pub fn find(&self, id: PieceId) -> Option<Position> {
        self.cells
            .iter()
            .find(|c| c.piece.is_some_and(|p| p.id == id))
            .map(|c| c.position)
    }

    /// Iterates over all pieces with their positions, in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.cells
            .iter()
            .filter_map(|c| c.piece.as_ref().map(|p| (c.position, p)))
    }

    /// Iterates over the pieces of one color, in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Position, &Piece)> + '_ {
        self.pieces().filter(move |(_, p)| p.color == color)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_diagram())
    }
}
