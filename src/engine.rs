//! Flat Monte Carlo move selection.
//!
//! The engine evaluates every empty cell by running thousands of rollouts
//! on disposable clones of the board. Each rollout shuffles the candidate
//! cells, fills half of them with the computer's own color, and checks
//! whether that alone already bridges the computer's walls. The opponent
//! is never simulated; the estimate asks "if I alone occupy half the
//! empty cells at random, do I already win?". Crude, but it needs no
//! game knowledge beyond the win query and plays a passable game.
//!
//! The random source and the scratch buffers (candidate pool, win/trial
//! accumulators) are fields of the engine, allocated once and reused
//! across move decisions.

use std::fmt;

use crate::board::{BoardError, HexBoard};
use crate::constants::N_ITERATIONS;
use crate::graph::Color;

/// Error from a move decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// No cell received any trial: the board is full, or the engine was
    /// configured with zero rollouts.
    NoCandidate,
    /// A rollout or the final move application failed.
    Board(BoardError),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::NoCandidate => write!(f, "no candidate move available"),
            EngineError::Board(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<BoardError> for EngineError {
    fn from(err: BoardError) -> Self {
        EngineError::Board(err)
    }
}

/// Monte Carlo move selector.
pub struct MonteCarloEngine {
    iterations: usize,
    rng: fastrand::Rng,
    /// Candidate cells for the move being decided.
    pool: Vec<(usize, usize)>,
    /// Per-cell win counts, row-major, accumulated over one decision.
    wins: Vec<u32>,
    /// Per-cell trial counts, row-major.
    trials: Vec<u32>,
}

impl Default for MonteCarloEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MonteCarloEngine {
    /// Engine with the default rollout count and an OS-seeded generator.
    pub fn new() -> Self {
        Self::with_iterations(N_ITERATIONS)
    }

    /// Engine with a custom rollout count.
    pub fn with_iterations(iterations: usize) -> Self {
        Self {
            iterations,
            rng: fastrand::Rng::new(),
            pool: Vec::new(),
            wins: Vec::new(),
            trials: Vec::new(),
        }
    }

    /// Deterministic engine for reproducible runs.
    pub fn with_seed(iterations: usize, seed: u64) -> Self {
        let mut engine = Self::with_iterations(iterations);
        engine.rng = fastrand::Rng::with_seed(seed);
        engine
    }

    /// Pick the empty cell with the best estimated win rate for
    /// `color_pc`, play it on `board`, and return its (row, col).
    ///
    /// Cells that never appeared in a rollout are ineligible; among the
    /// rest the strictly greatest `wins / trials` ratio wins, with ties
    /// resolved in favor of the first cell in row-major order. On a full
    /// board nothing is played and [`EngineError::NoCandidate`] is
    /// returned.
    pub fn select_and_apply_move(
        &mut self,
        board: &mut HexBoard,
        color_pc: Color,
    ) -> Result<(usize, usize), EngineError> {
        let size = board.size();

        self.wins.clear();
        self.wins.resize(size * size, 0);
        self.trials.clear();
        self.trials.resize(size * size, 0);
        self.pool.clear();
        self.pool.extend(board.empty_cells());
        if self.pool.is_empty() {
            return Err(EngineError::NoCandidate);
        }

        for _ in 0..self.iterations {
            let mut sim = board.clone();
            self.rollout(&mut sim, color_pc)?;
        }

        let mut best: Option<(usize, usize)> = None;
        let mut best_rate = -1.0_f64;
        for index in 0..size * size {
            if self.trials[index] == 0 {
                continue;
            }
            let rate = self.wins[index] as f64 / self.trials[index] as f64;
            if rate > best_rate {
                best_rate = rate;
                best = Some((index / size, index % size));
            }
        }

        let (row, col) = best.ok_or(EngineError::NoCandidate)?;
        board.enter_move(row, col, color_pc)?;
        Ok((row, col))
    }

    /// One rollout: shuffle the pool, play the first half of it as
    /// `color_pc` on the clone, and credit every played cell if the
    /// resulting position is a win.
    fn rollout(&mut self, sim: &mut HexBoard, color_pc: Color) -> Result<(), EngineError> {
        self.rng.shuffle(&mut self.pool);
        let n_next_moves = self.pool.len().div_ceil(2);
        let size = sim.size();

        for &(row, col) in &self.pool[..n_next_moves] {
            sim.enter_move(row, col, color_pc)?;
            self.trials[row * size + col] += 1;
        }

        if sim.wins(color_pc)? {
            for &(row, col) in &self.pool[..n_next_moves] {
                self.wins[row * size + col] += 1;
            }
        }

        Ok(())
    }
}
