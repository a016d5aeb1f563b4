//! Colored-edge graph with color-restricted reachability.
//!
//! The Hex board is modeled as an undirected multigraph: one vertex per
//! cell plus four virtual wall vertices. Placing a stone adds edges tagged
//! with the player's color, and win detection asks whether one wall can
//! reach the opposite wall over edges of that color alone.
//!
//! Edges are only ever added, never removed, and duplicate insertions
//! create parallel edges. Parallel edges do not affect reachability, so
//! no deduplication is performed.

use std::fmt;

/// A player color. Blue ('X') bridges the left and right walls, Red ('O')
/// bridges the top and bottom walls.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    /// The other player.
    pub fn opponent(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }

    /// Character used when rendering the board.
    pub fn stone(self) -> char {
        match self {
            Color::Blue => 'X',
            Color::Red => 'O',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Blue => write!(f, "Blue"),
            Color::Red => write!(f, "Red"),
        }
    }
}

/// An edge between two vertices, tagged with the color that created it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ColoredEdge {
    /// Vertex the edge starts from (the vertex whose adjacency list holds it).
    pub v: usize,
    /// Vertex the edge leads to.
    pub w: usize,
    /// Color of the player whose move created the adjacency.
    pub color: Color,
}

impl fmt::Display for ColoredEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}, color = {}", self.v, self.w, self.color)
    }
}

/// Error from a graph operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// A vertex id at or beyond the vertex count was supplied.
    InvalidVertex { vertex: usize, n_vertices: usize },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidVertex { vertex, n_vertices } => {
                write!(f, "invalid vertex {vertex}, graph has {n_vertices} vertices")
            }
        }
    }
}

impl std::error::Error for GraphError {}

/// Undirected colored multigraph over a fixed vertex count, stored as
/// adjacency lists. Cloning it deep-copies every list, which is what the
/// Monte Carlo engine relies on when it clones board state.
#[derive(Clone, Debug)]
pub struct Graph {
    n_vertices: usize,
    n_edges: usize,
    adjacency: Vec<Vec<ColoredEdge>>,
    /// Visited markers for reachability, reused across queries.
    marked: Vec<bool>,
    /// DFS stack, reused across queries.
    stack: Vec<usize>,
}

impl Graph {
    /// Create a graph with `n_vertices` vertices and no edges.
    pub fn new(n_vertices: usize) -> Self {
        Self {
            n_vertices,
            n_edges: 0,
            adjacency: vec![Vec::new(); n_vertices],
            marked: vec![false; n_vertices],
            stack: Vec::new(),
        }
    }

    /// Number of vertices.
    pub fn vertices(&self) -> usize {
        self.n_vertices
    }

    /// Number of undirected edges (each symmetric pair counts once).
    pub fn edges(&self) -> usize {
        self.n_edges
    }

    /// Edges stored in `vertex`'s adjacency list.
    pub fn adjacents(&self, vertex: usize) -> Result<&[ColoredEdge], GraphError> {
        self.check(vertex)?;
        Ok(&self.adjacency[vertex])
    }

    /// Add an undirected colored edge between `v` and `w`.
    ///
    /// The edge is stored in both adjacency lists. Repeated calls for the
    /// same pair create parallel edges.
    pub fn add_edge(&mut self, v: usize, w: usize, color: Color) -> Result<(), GraphError> {
        self.check(v)?;
        self.check(w)?;
        self.adjacency[v].push(ColoredEdge { v, w, color });
        self.adjacency[w].push(ColoredEdge { v: w, w: v, color });
        self.n_edges += 1;
        Ok(())
    }

    /// Whether `target` is reachable from `source` using only edges of the
    /// given color.
    ///
    /// Each call is a full traversal; no reachability state survives
    /// between calls. Iterative so that deep paths on large boards cannot
    /// exhaust the call stack.
    pub fn has_path_to(
        &mut self,
        source: usize,
        target: usize,
        color: Color,
    ) -> Result<bool, GraphError> {
        self.check(source)?;
        self.check(target)?;

        self.marked.fill(false);
        self.stack.clear();
        self.marked[source] = true;
        self.stack.push(source);

        while let Some(v) = self.stack.pop() {
            for edge in &self.adjacency[v] {
                if edge.color == color && !self.marked[edge.w] {
                    self.marked[edge.w] = true;
                    self.stack.push(edge.w);
                }
            }
        }

        Ok(self.marked[target])
    }

    fn check(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.n_vertices {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                vertex,
                n_vertices: self.n_vertices,
            })
        }
    }
}
