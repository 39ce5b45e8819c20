//! Move generation.
//!
//! Normal moves are single diagonal steps onto empty squares: forward only
//! for men, any direction for kings. Jumps are found by a depth-first search
//! that explores every capture chain; only chains that cannot be extended
//! are reported, and capturing is mandatory whenever a jump exists.
//!
//! The search never touches the board. Captured squares and visited landing
//! squares are tracked in scratch state owned by the search and unwound as
//! it backtracks, so callers never observe a simulated position.

use checkers_core::{Board, Color, Direction, Piece, Position};
use serde::{Deserialize, Serialize};
use tracing::trace;

/// An ordered list of landing squares for one move. Normal moves have a
/// single entry; jump chains have one entry per capture.
pub type Path = Vec<Position>;

/// A piece that may move under the forced-capture rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovablePiece {
    pub piece: Piece,
    pub position: Position,
    /// Number of captures in the piece's longest chain; 0 for normal moves.
    pub chain_len: usize,
}

/// Returns the empty squares one diagonal step away that `piece` may step to.
///
/// No forced-capture filtering is applied.
pub fn normal_moves(board: &Board, piece: &Piece, from: Position) -> Vec<Position> {
    Direction::for_step(piece.kind, piece.color)
        .iter()
        .map(|dir| dir.step(from))
        .filter(|&to| board.is_empty(to))
        .collect()
}

/// Returns every complete jump chain available to `piece` standing on `from`.
///
/// A chain is complete when no further capture is possible from its last
/// landing square, so a lone capture is reported as a path of length one.
pub fn jump_paths(board: &Board, piece: &Piece, from: Position) -> Vec<Path> {
    let mut search = JumpSearch {
        board,
        color: piece.color,
        origin: from,
        captured: Vec::new(),
        path: Vec::new(),
        found: Vec::new(),
    };
    search.explore(from);
    trace!(from = %from, paths = search.found.len(), "jump search");
    search.found
}

/// Returns the legal paths for the piece on `from`, considering that piece
/// alone.
///
/// If the piece can jump, only its longest chains are returned (all of them
/// on a tie). Otherwise each normal move is returned as a one-step path.
pub fn legal_moves(board: &Board, from: Position) -> Vec<Path> {
    let Some(piece) = board.piece_at(from) else {
        return Vec::new();
    };

    let jumps = jump_paths(board, piece, from);
    if jumps.is_empty() {
        return normal_moves(board, piece, from)
            .into_iter()
            .map(|to| vec![to])
            .collect();
    }

    let longest = max_chain(&jumps);
    jumps.into_iter().filter(|p| p.len() == longest).collect()
}

/// Returns the pieces of `color` that may move, applying forced capture
/// across the whole side.
///
/// If any piece can jump, only the pieces whose longest chain matches the
/// longest chain available to the side are returned. Otherwise every piece
/// with a normal move is returned.
pub fn movable_pieces(board: &Board, color: Color) -> Vec<MovablePiece> {
    let mut jumpers = Vec::new();
    let mut steppers = Vec::new();

    for (position, piece) in board.pieces_of(color) {
        let chain_len = max_chain(&jump_paths(board, piece, position));
        let candidate = MovablePiece {
            piece: *piece,
            position,
            chain_len,
        };
        if chain_len > 0 {
            jumpers.push(candidate);
        } else if !normal_moves(board, piece, position).is_empty() {
            steppers.push(candidate);
        }
    }

    if jumpers.is_empty() {
        return steppers;
    }

    let longest = jumpers.iter().map(|m| m.chain_len).max().unwrap_or(0);
    jumpers.retain(|m| m.chain_len == longest);
    jumpers
}

/// Length of the longest path, or 0 if there are none.
#[inline]
pub fn max_chain(paths: &[Path]) -> usize {
    paths.iter().map(Vec::len).max().unwrap_or(0)
}

/// Returns true if the two squares are a jump apart rather than a step.
#[inline]
pub fn is_jump(from: Position, to: Position) -> bool {
    (to.x - from.x).abs() == 2 && (to.y - from.y).abs() == 2
}

struct JumpSearch<'a> {
    board: &'a Board,
    color: Color,
    /// Square the moving piece started on; counts as empty during the search.
    origin: Position,
    /// Squares whose pieces have been taken earlier in the current chain.
    captured: Vec<Position>,
    /// Landing squares of the current chain.
    path: Path,
    found: Vec<Path>,
}

impl JumpSearch<'_> {
    fn explore(&mut self, from: Position) {
        let mut extended = false;

        for dir in Direction::ALL {
            let over = dir.step(from);
            let land = dir.jump(from);
            if !self.can_jump(over, land) {
                continue;
            }

            extended = true;
            self.captured.push(over);
            self.path.push(land);
            self.explore(land);
            self.path.pop();
            self.captured.pop();
        }

        if !extended && !self.path.is_empty() {
            self.found.push(self.path.clone());
        }
    }

    fn can_jump(&self, over: Position, land: Position) -> bool {
        if !self.board.is_inside(land) {
            return false;
        }

        let enemy = self
            .board
            .piece_at(over)
            .is_some_and(|p| p.color != self.color);
        if !enemy || self.captured.contains(&over) {
            return false;
        }

        let free = self.board.is_empty(land) || land == self.origin;
        free && !self.path.contains(&land)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use checkers_core::PieceKind;

    fn board(diagram: &str) -> Board {
        Board::from_diagram(diagram).unwrap()
    }

    fn piece_on(board: &Board, at: Position) -> Piece {
        *board.piece_at(at).unwrap()
    }

    #[test]
    fn man_steps_forward_only() {
        let b = board(
            "
            ........
            ........
            ........
            ........
            ...b....
            ........
            ........
            ........
            ",
        );
        let from = Position::new(3, 4);
        let mut moves = normal_moves(&b, &piece_on(&b, from), from);
        moves.sort();
        assert_eq!(moves, vec![Position::new(2, 3), Position::new(4, 3)]);
    }

    #[test]
    fn king_steps_everywhere() {
        let b = board(
            "
            ........
            ........
            ........
            ........
            ...W....
            ........
            ........
            ........
            ",
        );
        let from = Position::new(3, 4);
        let piece = piece_on(&b, from);
        assert_eq!(piece.kind, PieceKind::King);
        assert_eq!(normal_moves(&b, &piece, from).len(), 4);
    }

    #[test]
    fn edge_and_blocked_steps() {
        let b = board(
            "
            ........
            ........
            ........
            ........
            ........
            ........
            .w......
            b.......
            ",
        );
        let from = Position::new(0, 7);
        assert!(normal_moves(&b, &piece_on(&b, from), from).is_empty());
    }

    #[test]
    fn single_capture() {
        let b = board(
            "
            ........
            ........
            ........
            ........
            ...w....
            ..b.....
            ........
            ........
            ",
        );
        let from = Position::new(2, 5);
        assert_eq!(
            jump_paths(&b, &piece_on(&b, from), from),
            vec![vec![Position::new(4, 3)]]
        );
        assert_eq!(legal_moves(&b, from), vec![vec![Position::new(4, 3)]]);
    }

    #[test]
    fn no_capture_onto_occupied_square() {
        let b = board(
            "
            ........
            ........
            ........
            ....w...
            ...w....
            ..b.....
            ........
            ........
            ",
        );
        let from = Position::new(2, 5);
        assert!(jump_paths(&b, &piece_on(&b, from), from).is_empty());
    }

    #[test]
    fn no_capture_of_own_piece() {
        let b = board(
            "
            ........
            ........
            ........
            ........
            ...b....
            ..b.....
            ........
            ........
            ",
        );
        let from = Position::new(2, 5);
        assert!(jump_paths(&b, &piece_on(&b, from), from).is_empty());
    }

    #[test]
    fn longer_chain_replaces_shorter() {
        // c6 -> e4 -> g2; the single capture to e4 is not offered on its own.
        let b = board(
            "
            ........
            ........
            .....w..
            ........
            ...w....
            ..b.....
            ........
            ........
            ",
        );
        let from = Position::new(2, 5);
        assert_eq!(
            legal_moves(&b, from),
            vec![vec![Position::new(4, 3), Position::new(6, 1)]]
        );
    }

    #[test]
    fn branching_chains_keep_only_longest() {
        let b = board(
            "
            ........
            ........
            ........
            ........
            .w......
            ........
            .w.w....
            ..b.....
            ",
        );
        let from = Position::new(2, 7);

        let mut all = jump_paths(&b, &piece_on(&b, from), from);
        all.sort();
        assert_eq!(
            all,
            vec![
                vec![Position::new(0, 5), Position::new(2, 3)],
                vec![Position::new(4, 5)],
            ]
        );
        assert_eq!(
            legal_moves(&b, from),
            vec![vec![Position::new(0, 5), Position::new(2, 3)]]
        );
    }

    #[test]
    fn equal_chains_are_all_returned() {
        let b = board(
            "
            ........
            ........
            ........
            ........
            ........
            ..w.w...
            ...b....
            ........
            ",
        );
        let from = Position::new(3, 6);
        let mut moves = legal_moves(&b, from);
        moves.sort();
        assert_eq!(
            moves,
            vec![vec![Position::new(1, 4)], vec![Position::new(5, 4)]]
        );
    }

    #[test]
    fn men_capture_backwards() {
        let b = board(
            "
            ........
            ........
            ........
            ..b.....
            ...w....
            ........
            ........
            ........
            ",
        );
        let from = Position::new(2, 3);
        assert_eq!(legal_moves(&b, from), vec![vec![Position::new(4, 5)]]);
    }

    #[test]
    fn king_circuit_returns_to_origin() {
        let b = board(
            "
            ........
            ........
            ...B....
            ..w.w...
            ........
            ..w.w...
            ........
            ........
            ",
        );
        let from = Position::new(3, 2);
        let moves = legal_moves(&b, from);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|p| p.len() == 4));
        assert!(moves.iter().all(|p| p.last() == Some(&from)));
    }

    #[test]
    fn captured_piece_is_not_taken_twice() {
        // Bouncing back over d5 would land on the starting square.
        let b = board(
            "
            ........
            ........
            ........
            ........
            ...w....
            ..B.....
            ........
            ........
            ",
        );
        let from = Position::new(2, 5);
        assert_eq!(legal_moves(&b, from), vec![vec![Position::new(4, 3)]]);
    }

    #[test]
    fn search_leaves_board_untouched() {
        let b = board(
            "
            ........
            ........
            .....w..
            ........
            ...w....
            ..b.....
            ........
            ........
            ",
        );
        let before = b.clone();
        let _ = legal_moves(&b, Position::new(2, 5));
        assert_eq!(b, before);
    }

    #[test]
    fn empty_square_has_no_moves() {
        let b = Board::standard(8);
        assert!(legal_moves(&b, Position::new(0, 4)).is_empty());
    }

    #[test]
    fn initial_movable_pieces() {
        let b = Board::standard(8);
        let movable = movable_pieces(&b, Color::Black);
        let squares: Vec<Position> = movable.iter().map(|m| m.position).collect();
        assert_eq!(
            squares,
            vec![
                Position::new(0, 5),
                Position::new(2, 5),
                Position::new(4, 5),
                Position::new(6, 5),
            ]
        );
        assert!(movable.iter().all(|m| m.chain_len == 0));
    }

    #[test]
    fn forced_capture_is_side_wide() {
        let b = board(
            "
            ........
            ........
            ........
            ........
            ...w....
            ..b.....
            ........
            ......b.
            ",
        );
        let movable = movable_pieces(&b, Color::Black);
        assert_eq!(movable.len(), 1);
        assert_eq!(movable[0].position, Position::new(2, 5));
        assert_eq!(movable[0].chain_len, 1);
    }

    #[test]
    fn shorter_chains_lose_to_longest() {
        let b = board(
            "
            ........
            ........
            .....w..
            ........
            ...w....
            ..b...b.
            .....w..
            ........
            ",
        );
        let movable = movable_pieces(&b, Color::Black);
        assert_eq!(movable.len(), 1);
        assert_eq!(movable[0].position, Position::new(2, 5));
        assert_eq!(movable[0].chain_len, 2);
    }

    #[test]
    fn jump_detection() {
        assert!(is_jump(Position::new(2, 5), Position::new(4, 3)));
        assert!(!is_jump(Position::new(2, 5), Position::new(3, 4)));
    }
}
