//! Tictactoe-Rust: play Tic-Tac-Toe against an Easy or Hard opponent.
//!
//! ## Usage
//!
//! - `tictactoe-rust` - Show a demo
//! - `tictactoe-rust play` - Start the text protocol on stdin/stdout
//! - `tictactoe-rust demo` - Watch the Hard opponent play itself
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tictactoe_rust::board::{Board, GameOutcome, Mark};
use tictactoe_rust::minimax::best_move;
use tictactoe_rust::protocol::Engine;
use tictactoe_rust::selector::Difficulty;

/// Tictactoe-Rust: Tic-Tac-Toe with a perfect-play opponent
#[derive(Parser)]
#[command(name = "tictactoe-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the text protocol for use with a front end
    Play {
        /// Opponent strength
        #[arg(short, long, default_value_t = Difficulty::Hard)]
        difficulty: Difficulty,
        /// Seed for Easy-mode moves
        #[arg(short, long)]
        seed: Option<u64>,
    },
    /// Watch the Hard opponent play both sides
    Demo,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play { difficulty, seed }) => {
            let mut engine = match seed {
                Some(seed) => Engine::with_seed(difficulty, seed),
                None => Engine::new(difficulty),
            };
            info!(%difficulty, ?seed, "starting protocol loop");
            engine.run()?;
        }
        Some(Commands::Demo) | None => run_demo(),
    }
    Ok(())
}

fn run_demo() {
    println!("Tictactoe-Rust: Hard vs Hard\n");

    let mut board = Board::new();
    let mut to_move = Mark::X;
    let mut outcome = GameOutcome::InProgress;

    while !outcome.is_terminal() {
        let Some(best) = best_move(&board, to_move, to_move.opponent()) else {
            break;
        };
        let (row, col) = best.point;
        if board.place(row, col, to_move).is_err() {
            break;
        }
        println!(
            "{to_move} plays ({row}, {col})  score {:+}  nodes {}",
            best.score, best.nodes
        );
        println!("{board}");
        outcome = board.outcome(Mark::X, Mark::O);
        to_move = to_move.opponent();
    }

    println!("Result: {outcome}");
}
