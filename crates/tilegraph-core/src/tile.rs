//! The [`TileGraph`] type — a 4-connected grid of passable/impassable tiles.
//!
//! Adjacency is not stored: the successors of a tile are computed from its
//! own passability and that of its orthogonal neighbours.
//!
//! # Text format
//!
//! One line per grid row, rows separated by `'\n'`, one glyph per tile:
//! [`WALL`] (`'▀'`) for an impassable tile and [`FLOOR`] (`' '`) for a
//! passable one. Every row must have the same number of glyphs.
//!
//! ```text
//! ▀  ▀
//! ▀▀ ▀
//! ▀▀ ▀
//! ▀▀ ▀
//! ```

use std::fmt;
use std::str::FromStr;

use crate::node::{Edge, Node};
use crate::traits::Graph;

/// Glyph for an impassable tile.
pub const WALL: char = '▀';
/// Glyph for a passable tile.
pub const FLOOR: char = ' ';
/// First tile of a path in [`TileGraph::path_string`].
pub const PATH_START: char = 's';
/// Last tile of a path in [`TileGraph::path_string`].
pub const PATH_GOAL: char = 'g';
/// Intermediate tiles of a path in [`TileGraph::path_string`].
pub const PATH_STEP: char = '♥';

/// Cost of moving between two adjacent passable tiles.
pub const TILE_COST: f64 = 1.0;

/// A fixed-size grid graph whose edges follow from tile passability.
///
/// Tile `(row, col)` has node ID `row * cols + col`. Impassable tiles still
/// exist as nodes but have no successors or predecessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGraph {
    tiles: Vec<bool>,
    rows: usize,
    cols: usize,
}

impl TileGraph {
    /// Create a `rows × cols` grid where every tile has passability
    /// `passable`.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`. Use
    /// [`try_new`](Self::try_new) to handle that case.
    pub fn new(rows: usize, cols: usize, passable: bool) -> Self {
        match Self::try_new(rows, cols, passable) {
            Ok(g) => g,
            Err(e) => panic!("{e}"),
        }
    }

    /// Like [`new`](Self::new), but reports an oversized grid as
    /// [`TileGraphError::TooLarge`].
    pub fn try_new(rows: usize, cols: usize, passable: bool) -> Result<Self, TileGraphError> {
        let len = rows
            .checked_mul(cols)
            .ok_or(TileGraphError::TooLarge { rows, cols })?;
        Ok(Self {
            tiles: vec![passable; len],
            rows,
            cols,
        })
    }

    /// Parse a grid from its text form. See the [module docs](self) for the
    /// format.
    pub fn parse(s: &str) -> Result<Self, TileGraphError> {
        if s.is_empty() {
            return Ok(Self::new(0, 0, false));
        }
        let mut tiles = Vec::with_capacity(s.len());
        let mut cols: Option<usize> = None;
        let mut rows = 0;

        for (row, line) in s.split('\n').enumerate() {
            let mut width = 0;
            for (col, ch) in line.chars().enumerate() {
                match ch {
                    WALL => tiles.push(false),
                    FLOOR => tiles.push(true),
                    _ => return Err(TileGraphError::InvalidGlyph { ch, row, col }),
                }
                width += 1;
            }
            match cols {
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(TileGraphError::InconsistentSize {
                        row,
                        expected,
                        found: width,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let cols = cols.unwrap_or(0);
        log::debug!("parsed {rows}x{cols} tile graph");
        Ok(Self { tiles, rows, cols })
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Set the passability of tile `(row, col)`.
    pub fn set_passability(
        &mut self,
        row: usize,
        col: usize,
        passable: bool,
    ) -> Result<(), TileGraphError> {
        let Some(Node(i)) = self.coords_to_id(row, col) else {
            return Err(TileGraphError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        };
        self.tiles[i] = passable;
        Ok(())
    }

    /// Passability of tile `(row, col)`, or `None` if out of bounds.
    pub fn is_passable(&self, row: usize, col: usize) -> Option<bool> {
        self.coords_to_id(row, col).map(|Node(i)| self.tiles[i])
    }

    /// Node for tile `(row, col)`, or `None` if out of bounds.
    #[inline]
    pub fn coords_to_id(&self, row: usize, col: usize) -> Option<Node> {
        (row < self.rows && col < self.cols).then(|| Node(row * self.cols + col))
    }

    /// `(row, col)` of `node`, or `None` if it is not a tile of this grid.
    #[inline]
    pub fn id_to_coords(&self, node: Node) -> Option<(usize, usize)> {
        (node.0 < self.tiles.len()).then(|| (node.0 / self.cols, node.0 % self.cols))
    }

    #[inline]
    fn passable_node(&self, node: Node) -> bool {
        self.tiles.get(node.0).copied().unwrap_or(false)
    }

    /// Orthogonal in-bounds neighbours of `node` (up, right, down, left),
    /// regardless of passability.
    pub fn neighbors(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        let coords = self.id_to_coords(node);
        let dirs: [(isize, isize); 4] = [(-1, 0), (0, 1), (1, 0), (0, -1)];
        dirs.into_iter().filter_map(move |(dr, dc)| {
            let (row, col) = coords?;
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.coords_to_id(r, c)
        })
    }

    /// Render the grid with `path` drawn over it: [`PATH_START`] on its
    /// first tile, [`PATH_GOAL`] on its last and [`PATH_STEP`] in between.
    /// Nodes outside the grid are ignored.
    pub fn path_string(&self, path: &[Node]) -> String {
        let mut glyphs: Vec<char> = self
            .tiles
            .iter()
            .map(|&p| if p { FLOOR } else { WALL })
            .collect();
        let last = path.len().saturating_sub(1);
        for (i, node) in path.iter().enumerate() {
            let glyph = match i {
                0 => PATH_START,
                i if i == last => PATH_GOAL,
                _ => PATH_STEP,
            };
            if let Some(g) = glyphs.get_mut(node.0) {
                *g = glyph;
            }
        }
        self.join_rows(&glyphs)
    }

    fn join_rows(&self, glyphs: &[char]) -> String {
        let mut out = String::with_capacity(glyphs.len() * 3 + self.rows);
        for row in 0..self.rows {
            if row > 0 {
                out.push('\n');
            }
            out.extend(&glyphs[row * self.cols..(row + 1) * self.cols]);
        }
        out
    }
}

impl Graph for TileGraph {
    fn successors(&self, node: Node, buf: &mut Vec<Node>) {
        if !self.passable_node(node) {
            return;
        }
        buf.extend(self.neighbors(node).filter(|&n| self.passable_node(n)));
    }

    fn predecessors(&self, node: Node, buf: &mut Vec<Node>) {
        // Adjacency only depends on the passability of both tiles.
        self.successors(node, buf);
    }

    fn is_successor(&self, node: Node, successor: Node) -> bool {
        if !self.passable_node(node) || !self.passable_node(successor) {
            return false;
        }
        match (self.id_to_coords(node), self.id_to_coords(successor)) {
            (Some((r1, c1)), Some((r2, c2))) => r1.abs_diff(r2) + c1.abs_diff(c2) == 1,
            _ => false,
        }
    }

    fn is_predecessor(&self, node: Node, predecessor: Node) -> bool {
        self.is_successor(predecessor, node)
    }

    #[inline]
    fn node_exists(&self, node: Node) -> bool {
        node.0 < self.tiles.len()
    }

    fn degree(&self, node: Node) -> usize {
        if !self.passable_node(node) {
            return 0;
        }
        2 * self
            .neighbors(node)
            .filter(|&n| self.passable_node(n))
            .count()
    }

    fn cost(&self, node: Node, successor: Node) -> f64 {
        if self.is_successor(node, successor) {
            TILE_COST
        } else {
            0.0
        }
    }

    #[inline]
    fn is_directed(&self) -> bool {
        false
    }

    fn node_list(&self) -> Vec<Node> {
        (0..self.tiles.len()).map(Node).collect()
    }

    fn edge_list(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        let mut buf = Vec::with_capacity(4);
        for head in self.node_list() {
            buf.clear();
            self.successors(head, &mut buf);
            buf.sort_unstable();
            edges.extend(buf.iter().map(|&tail| Edge::new(head, tail)));
        }
        edges
    }
}

impl fmt::Display for TileGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path_string(&[]))
    }
}

impl FromStr for TileGraph {
    type Err = TileGraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors from building or editing a [`TileGraph`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TileGraphError {
    /// A row's width differs from the first row's.
    InconsistentSize {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than [`WALL`] or [`FLOOR`].
    InvalidGlyph { ch: char, row: usize, col: usize },
    /// Coordinates outside the grid.
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },
    /// `rows * cols` does not fit in `usize`.
    TooLarge { rows: usize, cols: usize },
}

impl fmt::Display for TileGraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "tile graph: row {row} has {found} tiles, expected {expected}"
            ),
            Self::InvalidGlyph { ch, row, col } => write!(
                f,
                "tile graph: invalid glyph '{ch}' at row {row}, column {col}"
            ),
            Self::OutOfBounds {
                row,
                col,
                rows,
                cols,
            } => write!(
                f,
                "tile graph: ({row}, {col}) is outside the {rows}x{cols} grid"
            ),
            Self::TooLarge { rows, cols } => {
                write!(f, "tile graph: {rows}x{cols} tiles overflow usize")
            }
        }
    }
}

impl std::error::Error for TileGraphError {}
