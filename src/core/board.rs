//! Board state: nine value cells plus a move counter.
//!
//! The board owns its cells exclusively; the only mutations are
//! `place_symbol` and `reset`. Presentation layers observe board state
//! through the query API rather than the board pushing updates outward.
//!
//! ## Invariants
//!
//! - A placed symbol never reverts except through `reset`.
//! - `move_count()` always equals the number of occupied cells.
//! - A failed placement leaves the board untouched.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::coord::{Coord, BOARD_SIZE};
use super::error::GameError;
use super::symbol::Symbol;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

/// The 3x3 game board.
///
/// Cells are stored row-major; `None` is an empty cell. The whole board is
/// 10 bytes and `Copy`, so AI strategies evaluate candidate moves on stack
/// clones instead of mutating the live board.
///
/// ```
/// use tictactoe_engine::{Board, Coord, Symbol};
///
/// let mut board = Board::new();
/// board.place_symbol(Coord::new(1, 1), Symbol::X)?;
/// assert_eq!(board.symbol_at(Coord::new(1, 1)), Some(Symbol::X));
/// assert_eq!(board.move_count(), 1);
/// assert_eq!(board.empty_cells().len(), 8);
/// # Ok::<(), tictactoe_engine::GameError>(())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Symbol>; CELL_COUNT],
    moves: u8,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            moves: 0,
        }
    }

    /// Clear all cells and zero the move counter.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Place a symbol on an empty in-range cell.
    ///
    /// Fails with [`GameError::InvalidMove`] if the coordinate is out of
    /// range or the cell is occupied. On failure nothing changes; on
    /// success exactly one cell is set and the move counter increments.
    pub fn place_symbol(&mut self, coord: Coord, symbol: Symbol) -> Result<(), GameError> {
        if !coord.in_bounds() || self.cells[coord.index()].is_some() {
            return Err(GameError::InvalidMove {
                row: coord.row,
                col: coord.col,
            });
        }

        self.cells[coord.index()] = Some(symbol);
        self.moves += 1;
        Ok(())
    }

    /// Get the symbol at a coordinate, or `None` if the cell is empty.
    ///
    /// Out-of-range coordinates also read as `None`.
    #[must_use]
    pub fn symbol_at(&self, coord: Coord) -> Option<Symbol> {
        if coord.in_bounds() {
            self.cells[coord.index()]
        } else {
            None
        }
    }

    /// Whether an in-range cell is empty. Out-of-range is not empty:
    /// it is never a legal move target.
    #[must_use]
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        coord.in_bounds() && self.cells[coord.index()].is_none()
    }

    /// Coordinates of all empty cells in row-major order.
    ///
    /// Empty when the board is full. The `SmallVec` never spills: nine
    /// cells bound the result.
    #[must_use]
    pub fn empty_cells(&self) -> SmallVec<[Coord; CELL_COUNT]> {
        Coord::all().filter(|&c| self.cells[c.index()].is_none()).collect()
    }

    /// Number of occupied cells (0-9).
    #[must_use]
    pub fn move_count(&self) -> u8 {
        self.moves
    }

    /// Whether all nine cells are occupied.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.moves as usize >= CELL_COUNT
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                match self.cells[Coord::new(row, col).index()] {
                    Some(symbol) => write!(f, "{symbol}")?,
                    None => write!(f, ".")?,
                }
            }
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
