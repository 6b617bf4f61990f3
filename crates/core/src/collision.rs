//! Collision tests for a piece against the board.
//!
//! Pure functions: nothing here mutates the board or the piece.

use crate::board::Board;
use crate::pieces::ActivePiece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `piece`, shifted by (d_col, d_row), would hit a wall, the floor or
/// a locked cell.
///
/// Cells above the grid (row < 0) only ever collide with the side walls.
pub fn collides(board: &Board, piece: &ActivePiece, d_col: i8, d_row: i8) -> bool {
    piece.shape.cells().any(|(r, c)| {
        let row = piece.row as i16 + r as i16 + d_row as i16;
        let col = piece.col as i16 + c as i16 + d_col as i16;

        if col < 0 || col >= BOARD_WIDTH as i16 || row >= BOARD_HEIGHT as i16 {
            return true;
        }
        row >= 0 && board.is_occupied(row as i8, col as i8)
    })
}

/// Whether the piece fits where it currently is
pub fn fits(board: &Board, piece: &ActivePiece) -> bool {
    !collides(board, piece, 0, 0)
}
