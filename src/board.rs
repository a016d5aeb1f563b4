//! Hex board state and win detection.
//!
//! The board owns a grid of cells and a colored graph with one vertex per
//! cell plus four virtual wall vertices. Blue owns the left and right
//! walls, Red the top and bottom. A player wins when their two walls are
//! connected through edges of their color; edges appear as stones of the
//! same color land on adjacent cells.
//!
//! Boards are cloned wholesale by the Monte Carlo engine, so the whole
//! struct is a plain deep-`Clone`: grid, graph, and counters.

use std::fmt;

use crate::constants::{HEX_NEIGHBORS, MIN_BOARD_SIZE, N_WALLS};
use crate::graph::{Color, Graph, GraphError};

/// Error from constructing a board or applying a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Requested size is below [`MIN_BOARD_SIZE`].
    InvalidSize(usize),
    /// Move coordinates fall outside the grid.
    OutOfBounds { row: usize, col: usize, size: usize },
    /// The targeted cell already holds a stone.
    Occupied { row: usize, col: usize },
    /// An internal graph operation failed.
    Graph(GraphError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidSize(size) => {
                write!(f, "invalid board size {size}, minimum is {MIN_BOARD_SIZE}")
            }
            BoardError::OutOfBounds { row, col, size } => {
                write!(f, "move ({row}, {col}) is outside the {size}x{size} board")
            }
            BoardError::Occupied { row, col } => {
                write!(f, "cell ({row}, {col}) is already occupied")
            }
            BoardError::Graph(err) => write!(f, "{err}"),
        }
    }
}

impl std::error::Error for BoardError {}

impl From<GraphError> for BoardError {
    fn from(err: GraphError) -> Self {
        BoardError::Graph(err)
    }
}

/// A Hex board of `size * size` cells.
#[derive(Clone, Debug)]
pub struct HexBoard {
    size: usize,
    left_blue_wall: usize,
    right_blue_wall: usize,
    bottom_red_wall: usize,
    top_red_wall: usize,
    blue_moves: usize,
    red_moves: usize,
    graph: Graph,
    /// Row-major grid; `None` is an empty cell.
    cells: Vec<Option<Color>>,
}

impl HexBoard {
    /// Create an empty board and wire the border cells to the wall
    /// vertices: every column-0 and column-(size-1) cell to the Blue
    /// walls, every row-0 and row-(size-1) cell to the Red walls.
    pub fn new(size: usize) -> Result<Self, BoardError> {
        if size < MIN_BOARD_SIZE {
            return Err(BoardError::InvalidSize(size));
        }

        let n_cells = size * size;
        let mut board = Self {
            size,
            left_blue_wall: n_cells,
            right_blue_wall: n_cells + 1,
            bottom_red_wall: n_cells + 2,
            top_red_wall: n_cells + 3,
            blue_moves: 0,
            red_moves: 0,
            graph: Graph::new(n_cells + N_WALLS),
            cells: vec![None; n_cells],
        };

        for i in 0..size {
            let left = board.index(i, 0);
            let right = board.index(i, size - 1);
            board.graph.add_edge(left, board.left_blue_wall, Color::Blue)?;
            board.graph.add_edge(right, board.right_blue_wall, Color::Blue)?;
        }
        for j in 0..size {
            let top = board.index(0, j);
            let bottom = board.index(size - 1, j);
            board.graph.add_edge(top, board.top_red_wall, Color::Red)?;
            board.graph.add_edge(bottom, board.bottom_red_wall, Color::Red)?;
        }

        Ok(board)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of accepted moves for the given color.
    pub fn moves(&self, color: Color) -> usize {
        match color {
            Color::Blue => self.blue_moves,
            Color::Red => self.red_moves,
        }
    }

    /// Stone at (row, col), or `None` when empty or out of range.
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells[self.index(row, col)]
    }

    /// Whether (row, col) is a vacant cell. Out-of-range coordinates are
    /// not cells and therefore not empty.
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        row < self.size && col < self.size && self.cells[self.index(row, col)].is_none()
    }

    /// Vacant cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(index, _)| self.coordinates(index))
    }

    /// Place a stone of `color` at (row, col).
    ///
    /// On success the cell is filled, the color's move counter bumped, and
    /// an edge added to each in-bounds same-colored hex neighbor. A
    /// rejected move returns an error and changes no state; the caller
    /// decides whether to re-prompt.
    pub fn enter_move(&mut self, row: usize, col: usize, color: Color) -> Result<(), BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfBounds {
                row,
                col,
                size: self.size,
            });
        }
        let index = self.index(row, col);
        if self.cells[index].is_some() {
            return Err(BoardError::Occupied { row, col });
        }

        self.cells[index] = Some(color);
        match color {
            Color::Blue => self.blue_moves += 1,
            Color::Red => self.red_moves += 1,
        }

        for &(dr, dc) in &HEX_NEIGHBORS {
            let r = row as isize + dr;
            let c = col as isize + dc;
            if r < 0 || c < 0 {
                continue;
            }
            let (r, c) = (r as usize, c as usize);
            if r >= self.size || c >= self.size {
                continue;
            }
            let neighbor = self.index(r, c);
            if self.cells[neighbor] == Some(color) {
                self.graph.add_edge(index, neighbor, color)?;
            }
        }

        Ok(())
    }

    /// Whether `color` has connected its two walls.
    ///
    /// Fewer than `size` stones can never bridge opposite walls, so the
    /// reachability query is skipped until the move count reaches the
    /// board size.
    pub fn wins(&mut self, color: Color) -> Result<bool, BoardError> {
        let (moves, source, target) = match color {
            Color::Blue => (self.blue_moves, self.left_blue_wall, self.right_blue_wall),
            Color::Red => (self.red_moves, self.bottom_red_wall, self.top_red_wall),
        };
        if moves < self.size {
            return Ok(false);
        }
        Ok(self.graph.has_path_to(source, target, color)?)
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.size, index % self.size)
    }
}

impl fmt::Display for HexBoard {
    /// ASCII rendering with each row shifted right, so that the rhombic
    /// hex adjacency reads correctly:
    ///
    /// ```text
    /// HEX BOARD:
    ///   0   1
    ///  0 X - .
    ///     \ / \
    ///    1 . - O
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "HEX BOARD:")?;
        write!(f, " ")?;
        for j in 0..self.size {
            write!(f, "{j:>2}  ")?;
        }
        writeln!(f)?;

        for i in 0..self.size {
            write!(f, "{:pad$}{i:>2} ", "", pad = 2 * i)?;
            for j in 0..self.size {
                let ch = match self.cells[self.index(i, j)] {
                    Some(color) => color.stone(),
                    None => '.',
                };
                write!(f, "{ch}")?;
                if j < self.size - 1 {
                    write!(f, " - ")?;
                }
            }
            writeln!(f)?;
            if i < self.size - 1 {
                write!(f, "{:pad$}\\", "", pad = 2 * i + 4)?;
                for _ in 0..self.size - 1 {
                    write!(f, " / \\")?;
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
