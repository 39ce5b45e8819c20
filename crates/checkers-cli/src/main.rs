//! Console checkers.
//!
//! Plays a two-player game on the terminal, or prints the starting position
//! as a board diagram or JSON snapshot.

mod config;
mod play;
mod render;

use anyhow::Context;
use checkers_engine::Game;
use clap::{Parser, Subcommand};
use config::GameConfig;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Two-player checkers in the terminal")]
struct Cli {
    /// Configuration file (defaults to ./checkers.toml when present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    /// Board size, overriding the configuration file
    #[arg(short, long, global = true)]
    board_size: Option<u8>,
    /// Log engine activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game, reading moves from stdin
    Play,
    /// Print the starting position
    Show {
        /// Print the JSON snapshot instead of the board
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = GameConfig::load(cli.config.as_deref()).context("loading configuration")?;
    let board_size = cli.board_size.unwrap_or(config.board_size);
    let players = config.players()?;

    let mut game = Game::new(board_size, players)?;
    game.start();

    match cli.command {
        Commands::Play => {
            play::run(&mut game, io::stdin().lock(), io::stdout().lock())?;
        }
        Commands::Show { json: true } => {
            play::dump_json(&game, io::stdout().lock())?;
        }
        Commands::Show { json: false } => {
            print!("{}", render::board(game.board(), &[]));
            print!("{}", render::piece_counts(&game));
        }
    }

    Ok(())
}
