//! Hex-Rust: a console Hex game with a flat Monte Carlo opponent.
//!
//! The computer chooses its moves by cloning the board thousands of times,
//! filling half of the empty cells with its own color at random, and
//! checking whether its two walls are already connected. Win detection is
//! a color-restricted reachability query on a graph with one vertex per
//! cell plus four virtual wall vertices.
//!
//! ## Modules
//!
//! - [`constants`] - Board geometry and engine parameters
//! - [`graph`] - Colored-edge multigraph and reachability
//! - [`board`] - Hex board state, move application, win queries
//! - [`engine`] - Flat Monte Carlo move selection
//! - [`game`] - Interactive console loop
//!
//! ## Example
//!
//! ```
//! use hex_rust::board::HexBoard;
//! use hex_rust::engine::MonteCarloEngine;
//! use hex_rust::graph::Color;
//!
//! // The human opens on a small board
//! let mut board = HexBoard::new(3)?;
//! board.enter_move(0, 0, Color::Blue)?;
//!
//! // The engine answers for Red
//! let mut engine = MonteCarloEngine::with_iterations(100);
//! let (row, col) = engine.select_and_apply_move(&mut board, Color::Red)?;
//! assert_eq!(board.get(row, col), Some(Color::Red));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod board;
pub mod constants;
pub mod engine;
pub mod game;
pub mod graph;
