//! Board coordinates.
//!
//! Cells are addressed by `(row, col)` with both components in `0..3`.
//! Row-major order (left to right, top to bottom) is the canonical
//! iteration order everywhere in the crate: `empty_cells`, the AI's
//! greedy scan, and win-line tables all use it. This keeps tie-breaking
//! deterministic and reproducible.

use serde::{Deserialize, Serialize};

/// Number of rows and columns on the board.
pub const BOARD_SIZE: u8 = 3;

/// A cell coordinate on the 3x3 board.
///
/// ```
/// use tictactoe_engine::Coord;
///
/// let c = Coord::new(1, 2);
/// assert_eq!(c.index(), 5);
/// assert!(c.in_bounds());
/// assert!(!Coord::new(3, 0).in_bounds());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    /// Create a coordinate. Bounds are checked at use sites
    /// (`Board::place_symbol`), not at construction.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Whether both components are within `0..3`.
    #[must_use]
    pub const fn in_bounds(self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major flat index into the cell array.
    ///
    /// Only meaningful for in-bounds coordinates.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE as usize + self.col as usize
    }

    /// Coordinate for a row-major flat index.
    #[must_use]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / BOARD_SIZE as usize) as u8,
            col: (index % BOARD_SIZE as usize) as u8,
        }
    }

    /// Iterate over all nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Coord::new(row, col)))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
