//! Interactive console game loop.

use crate::render;
use checkers_core::Position;
use checkers_engine::{Game, GameView, Path};
use std::io::{self, BufRead, Write};

/// Runs a game, reading moves from `input` and writing to `out`, until the
/// game is decided, the player types `quit`, or input ends.
///
/// Squares the side to move can land on are marked `*` on the board.
pub fn run<R: BufRead, W: Write>(game: &mut Game, mut input: R, mut out: W) -> io::Result<()> {
    let mut line = String::new();

    loop {
        let current = game.current_player().clone();
        let moves: Vec<(Position, Path)> = if game.is_game_over() {
            Vec::new()
        } else {
            game.movable_pieces(current.color)
                .into_iter()
                .flat_map(|m| {
                    game.legal_moves(m.piece.id)
                        .into_iter()
                        .map(move |path| (m.position, path))
                })
                .collect()
        };
        let landings: Vec<Position> = moves
            .iter()
            .filter_map(|(_, path)| path.last().copied())
            .collect();

        writeln!(out, "\n{}", render::board(game.board(), &landings))?;
        write!(out, "{}", render::piece_counts(game))?;

        if let Some(winner) = game.winner() {
            writeln!(out, "\n{winner} WINS!")?;
            break;
        }

        writeln!(out, "\n{}'s Turn ({})", current.name, current.color)?;
        for (from, path) in &moves {
            writeln!(out, "  {}", render::path(*from, path))?;
        }

        write!(out, "Move (or 'quit'): ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let command = line.trim();
        if command.eq_ignore_ascii_case("quit") {
            break;
        }

        let Some((from, path)) = render::parse_move(command) else {
            writeln!(out, "Could not read move '{command}'. Type squares like: c6 d5")?;
            continue;
        };
        let Some(piece) = game.piece_at(from) else {
            writeln!(out, "Invalid piece: no piece on {from}")?;
            continue;
        };

        match game.move_piece(piece.id, &path) {
            Ok(events) => {
                for event in &events {
                    writeln!(out, "{event}")?;
                }
            }
            Err(e) => writeln!(out, "Invalid move: {e}")?,
        }
    }

    writeln!(out, "\nThanks for playing Checkers!")?;
    Ok(())
}

/// Writes the snapshot of `game` as pretty-printed JSON.
pub fn dump_json<W: Write>(game: &Game, mut out: W) -> io::Result<()> {
    let view = GameView::new(game, &[]);
    serde_json::to_writer_pretty(&mut out, &view)?;
    writeln!(out)
}
