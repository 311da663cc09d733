//! Tictactoe-Rust: play Tic-Tac-Toe against a minimax engine.
//!
//! ## Usage
//!
//! - `tictactoe-rust` - Play a game, human first
//! - `tictactoe-rust play --computer-first` - Let the computer open
//! - `tictactoe-rust selfplay --games 200 --seed 7` - Engine vs. random opponent
//!
//! Set `RUST_LOG=debug` to see the score of every candidate move on stderr.

use std::io;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tictactoe_rust::board::Mark;
use tictactoe_rust::console::ConsoleGame;
use tictactoe_rust::constants::{SELFPLAY_GAMES, SELFPLAY_SEED};
use tictactoe_rust::playout::self_play;

/// Tictactoe-Rust: a Tic-Tac-Toe engine that never loses
#[derive(Parser)]
#[command(name = "tictactoe-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game on the terminal
    Play {
        /// Let the computer make the first move
        #[arg(long)]
        computer_first: bool,
    },
    /// Pit the engine against a random opponent and report the tally
    Selfplay {
        /// Number of games to play
        #[arg(long, default_value_t = SELFPLAY_GAMES)]
        games: usize,
        /// Seed for the random opponent
        #[arg(long, default_value_t = SELFPLAY_SEED)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { computer_first }) => run_play(computer_first),
        Some(Commands::Selfplay { games, seed }) => run_selfplay(games, seed),
        None => run_play(false),
    }
}

fn run_play(computer_first: bool) -> Result<()> {
    let first = if computer_first {
        Mark::Computer
    } else {
        Mark::Player
    };
    let mut console = ConsoleGame::new(first);
    console
        .run(io::stdin().lock(), io::stdout().lock())
        .context("console session failed")?;
    Ok(())
}

fn run_selfplay(games: usize, seed: u64) -> Result<()> {
    let tally = self_play(games, seed).context("self-play aborted")?;
    println!("{tally}");
    if tally.player_wins > 0 {
        bail!("engine lost {} game(s)", tally.player_wins);
    }
    Ok(())
}
