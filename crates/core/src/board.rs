//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is either empty or holds the kind
//! of the piece that was locked there. Storage is a flat row-major array.
//! Coordinates are (row, col): row 0 is the top visible row, col 0 the left
//! column. Rows above the grid are negative and never stored.

use arrayvec::ArrayVec;

use crate::pieces::ActivePiece;
use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Number of rows, as a usize for array sizes
pub const BOARD_ROWS: usize = BOARD_HEIGHT as usize;

/// Number of columns, as a usize for array sizes
pub const BOARD_COLS: usize = BOARD_WIDTH as usize;

const BOARD_SIZE: usize = BOARD_ROWS * BOARD_COLS;

/// Rows removed by one call to [`Board::clear_full_rows`].
///
/// A clear can never remove more rows than the board has.
pub type ClearedRows = ArrayVec<usize, BOARD_ROWS>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if Self::is_out_of_bounds(row, col) {
            return None;
        }
        Some((row as usize) * BOARD_COLS + (col as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Whether (row, col) lies outside the visible grid
    pub fn is_out_of_bounds(row: i8, col: i8) -> bool {
        row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8
    }

    /// Get cell at (row, col), or `None` if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col). Returns false if out of bounds.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (row, col) is inside the grid and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * BOARD_COLS;
        &self.cells[start..start + BOARD_COLS]
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        row < BOARD_ROWS && self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Whether every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Write a piece's kind into every filled cell that is on the grid.
    ///
    /// Cells above row 0 are dropped. Returns how many cells were written.
    pub fn lock_piece(&mut self, piece: &ActivePiece) -> usize {
        let mut written = 0;
        for (row, col) in piece.cells() {
            if row < 0 {
                continue;
            }
            if self.set(row, col, Some(piece.kind)) {
                written += 1;
            }
        }
        written
    }

    /// Remove one row, shift everything above it down and empty the top row.
    fn collapse_row(&mut self, row: usize) {
        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src = (r - 1) * BOARD_COLS;
            self.cells.copy_within(src..src + BOARD_COLS, r * BOARD_COLS);
        }
        self.cells[..BOARD_COLS].fill(None);
    }

    /// Clear all full rows, scanning bottom to top.
    ///
    /// After a removal the same index is checked again, since the row that
    /// slid into it may be full as well. Returns the scan index of every
    /// removal, in order.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut next = BOARD_ROWS;

        while next > 0 {
            let row = next - 1;
            if self.is_row_full(row) {
                self.collapse_row(row);
                cleared.push(row);
            } else {
                next -= 1;
            }
        }

        cleared
    }

    /// Copy the grid into a 2D array (for snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_COLS]; BOARD_ROWS]) {
        for (r, dst) in out.iter_mut().enumerate() {
            dst.copy_from_slice(self.row(r));
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Empty the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
