//! Hex-Rust: console Hex against a flat Monte Carlo opponent.
//!
//! ## Usage
//!
//! - `hex-rust` - Play interactively (prompts for size and color)
//! - `hex-rust play --size 7 --color r` - Play with settings from the CLI
//! - `hex-rust demo` - Watch two engines play each other

use anyhow::Result;
use clap::{Parser, Subcommand};

use hex_rust::board::HexBoard;
use hex_rust::constants::N_ITERATIONS;
use hex_rust::engine::MonteCarloEngine;
use hex_rust::game::{self, ConsoleGame};
use hex_rust::graph::Color;

/// Hex-Rust: a console Hex game with a Monte Carlo engine
#[derive(Parser)]
#[command(name = "hex-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game against the engine
    Play {
        /// Board size; prompted for interactively when omitted
        #[arg(long)]
        size: Option<usize>,
        /// Your color, 'b' for Blue or 'r' for Red; prompted for when omitted
        #[arg(long)]
        color: Option<char>,
        /// Rollouts per computer move
        #[arg(long, default_value_t = N_ITERATIONS)]
        iterations: usize,
    },
    /// Watch two engines play each other on a small board
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Play {
            size,
            color,
            iterations,
        }) => run_play(size, color, iterations),
        Some(Commands::Demo) => run_demo(),
        None => run_play(None, None, N_ITERATIONS),
    }
}

fn run_play(size: Option<usize>, color: Option<char>, iterations: usize) -> Result<()> {
    let size = match size {
        Some(size) => size,
        None => game::prompt_size()?,
    };
    let color_player = match color {
        Some(c) if c.eq_ignore_ascii_case(&'r') => Color::Red,
        Some(_) => Color::Blue,
        None => game::prompt_color()?,
    };

    let board = HexBoard::new(size)?;
    let engine = MonteCarloEngine::with_iterations(iterations);
    ConsoleGame::new(board, engine, color_player).run()
}

fn run_demo() -> Result<()> {
    println!("Hex-Rust: flat Monte Carlo Hex engine\n");

    let mut board = HexBoard::new(5)?;
    let mut engine = MonteCarloEngine::with_iterations(2_000);
    let mut to_move = Color::Blue;

    let winner = loop {
        let (row, col) = engine.select_and_apply_move(&mut board, to_move)?;
        println!("{to_move} plays ({row}, {col})");
        if board.wins(to_move)? {
            break to_move;
        }
        to_move = to_move.opponent();
    };

    println!();
    print!("{board}");
    println!("{winner} wins!");
    Ok(())
}
