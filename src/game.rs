//! Interactive console game.
//!
//! Thin collaborator around the core: prints the board, reads the human's
//! moves from stdin, re-prompts on rejected input, and lets the engine
//! answer. All game rules live in [`HexBoard`] and [`MonteCarloEngine`];
//! this module only shuttles text.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};

use crate::board::HexBoard;
use crate::constants::MIN_BOARD_SIZE;
use crate::engine::MonteCarloEngine;
use crate::graph::Color;

/// Console game state: the live board, the engine, and who plays which
/// color.
pub struct ConsoleGame {
    board: HexBoard,
    engine: MonteCarloEngine,
    color_player: Color,
    color_pc: Color,
}

impl ConsoleGame {
    pub fn new(board: HexBoard, engine: MonteCarloEngine, color_player: Color) -> Self {
        Self {
            board,
            engine,
            color_player,
            color_pc: color_player.opponent(),
        }
    }

    /// Run the game to completion, alternating human and computer turns
    /// with a win check after each move.
    ///
    /// Blue always opens, so when the human picked Red the engine moves
    /// first.
    pub fn run(&mut self) -> Result<()> {
        let stdin = io::stdin();
        let mut lines = stdin.lock().lines();

        if self.color_pc == Color::Blue {
            println!("PC starts...");
            println!("Try to connect horizontal walls with a vertical path.");
            self.pc_turn()?;
        } else {
            println!("Try to connect vertical walls with a horizontal path.");
        }

        loop {
            println!();
            print!("{}", self.board);
            self.human_turn(&mut lines)?;
            if self.board.wins(self.color_player)? {
                break;
            }
            self.pc_turn()?;
            if self.board.wins(self.color_pc)? {
                break;
            }
        }

        println!();
        print!("{}", self.board);
        let winner = if self.board.wins(Color::Blue)? {
            Color::Blue
        } else {
            Color::Red
        };
        println!("{winner} wins!");
        Ok(())
    }

    /// Read moves until one is accepted by the board.
    fn human_turn(
        &mut self,
        lines: &mut impl Iterator<Item = io::Result<String>>,
    ) -> Result<()> {
        print!("Enter your move (row, col): ");
        io::stdout().flush()?;
        loop {
            let line = lines.next().context("input closed before the game ended")??;
            if let Some((row, col)) = parse_move(&line) {
                if self.board.enter_move(row, col, self.color_player).is_ok() {
                    return Ok(());
                }
            }
            print!("Invalid move! Please enter again: ");
            io::stdout().flush()?;
        }
    }

    fn pc_turn(&mut self) -> Result<()> {
        let (row, col) = self
            .engine
            .select_and_apply_move(&mut self.board, self.color_pc)?;
        println!("PC moves: row = {row}, col = {col}");
        Ok(())
    }
}

/// Parse "row col" (a comma between the numbers is also accepted).
/// Anything after the first two numbers is ignored.
fn parse_move(line: &str) -> Option<(usize, usize)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    Some((row, col))
}

/// Prompt until a size of at least [`MIN_BOARD_SIZE`] is entered.
pub fn prompt_size() -> Result<usize> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("Define the size of the board (size >= {MIN_BOARD_SIZE}): ");
        io::stdout().flush()?;
        let line = lines.next().context("input closed during setup")??;
        if let Ok(size) = line.trim().parse::<usize>() {
            if size >= MIN_BOARD_SIZE {
                println!();
                return Ok(size);
            }
        }
    }
}

/// Ask for the human's color; anything other than 'r' means Blue.
pub fn prompt_color() -> Result<Color> {
    print!("Select your color ('b' for blue, 'r' for red, blue is the default): ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    println!();
    if line.trim().eq_ignore_ascii_case("r") {
        Ok(Color::Red)
    } else {
        Ok(Color::Blue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move_plain() {
        assert_eq!(parse_move("2 3"), Some((2, 3)));
        assert_eq!(parse_move("  0   0  "), Some((0, 0)));
    }

    #[test]
    fn test_parse_move_with_comma() {
        assert_eq!(parse_move("2, 3"), Some((2, 3)));
        assert_eq!(parse_move("2,3"), Some((2, 3)));
    }

    #[test]
    fn test_parse_move_rejects_garbage() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("one two"), None);
        assert_eq!(parse_move("4"), None);
        assert_eq!(parse_move("-1 2"), None);
    }

    #[test]
    fn test_parse_move_ignores_trailing_tokens() {
        assert_eq!(parse_move("1 2 extra"), Some((1, 2)));
    }
}
