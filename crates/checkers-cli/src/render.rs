//! Plain-text rendering for the console.

use checkers_core::{Board, Position};
use checkers_engine::{Game, Path};

/// Draws the board with column letters and row numbers.
///
/// Empty playable squares show `.`; squares listed in `marks` show `*`.
pub fn board(board: &Board, marks: &[Position]) -> String {
    let size = board.size() as i8;
    let mut out = String::from("   ");
    for x in 0..size {
        out.push_str(&format!(" {} ", (b'a' + x as u8) as char));
    }
    out.push('\n');

    for y in 0..size {
        out.push_str(&format!("{:>2} ", y + 1));
        for x in 0..size {
            let pos = Position::new(x, y);
            let c = match board.piece_at(pos) {
                Some(piece) => piece.to_char(),
                None if marks.contains(&pos) => '*',
                None if pos.is_playable() => '.',
                None => ' ',
            };
            out.push(' ');
            out.push(c);
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

/// One line per player with the number of pieces still in play.
pub fn piece_counts(game: &Game) -> String {
    game.players()
        .iter()
        .map(|p| format!("{}: {} piece(s)\n", p, game.player_pieces(p.color).len()))
        .collect()
}

/// Formats a move as its starting square followed by each landing square.
pub fn path(from: Position, path: &Path) -> String {
    std::iter::once(from)
        .chain(path.iter().copied())
        .map(|p| p.to_algebraic())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a move typed as squares separated by spaces or dashes, e.g.
/// `c6 d5` or `c6-e4-g2`. The first square is the piece to move.
pub fn parse_move(input: &str) -> Option<(Position, Path)> {
    let mut squares = input
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|s| !s.is_empty())
        .map(Position::from_algebraic);

    let from = squares.next()??;
    let path = squares.collect::<Option<Path>>()?;
    if path.is_empty() {
        return None;
    }
    Some((from, path))
}
