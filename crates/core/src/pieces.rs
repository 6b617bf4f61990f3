//! Pieces module - tetromino shape matrices and the active piece
//!
//! Shapes are small boolean matrices (at most 4x4) with explicit dimensions.
//! Rotating a shape produces a new matrix with width and height swapped, so
//! the I piece is 4x1 in spawn orientation and 1x4 after one turn.

use crate::types::{PieceKind, BOARD_WIDTH, SPAWN_ROW};

/// Largest side of any tetromino bounding box
pub const MAX_SHAPE_DIM: usize = 4;

/// A tetromino shape as a row-major occupancy matrix.
///
/// Only the top-left `height x width` corner of `rows` is meaningful; the rest
/// is always `false`, which keeps derived equality exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: [[bool; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    width: u8,
    height: u8,
}

impl Shape {
    /// Canonical spawn-orientation shape for a piece kind
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_bits(&[&[1, 1, 1, 1]]),
            PieceKind::O => Self::from_bits(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Self::from_bits(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::S => Self::from_bits(&[&[0, 1, 1], &[1, 1, 0]]),
            PieceKind::Z => Self::from_bits(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::J => Self::from_bits(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::L => Self::from_bits(&[&[0, 0, 1], &[1, 1, 1]]),
        }
    }

    /// Build a shape from rows of 0/1 values.
    ///
    /// Rows must be non-empty, equally long, and no larger than 4x4.
    pub fn from_bits(bits: &[&[u8]]) -> Self {
        let height = bits.len();
        let width = bits.first().map_or(0, |r| r.len());
        assert!(
            (1..=MAX_SHAPE_DIM).contains(&height) && (1..=MAX_SHAPE_DIM).contains(&width),
            "shape must fit in {MAX_SHAPE_DIM}x{MAX_SHAPE_DIM}"
        );

        let mut rows = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        for (r, row) in bits.iter().enumerate() {
            assert_eq!(row.len(), width, "shape rows must be equally long");
            for (c, &bit) in row.iter().enumerate() {
                rows[r][c] = bit != 0;
            }
        }

        Self {
            rows,
            width: width as u8,
            height: height as u8,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Iterate filled cells as (row, col) offsets from the shape's top-left corner
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        (0..self.height as usize).flat_map(move |r| {
            (0..self.width as usize)
                .filter(move |&c| self.rows[r][c])
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Rotate 90° clockwise (transpose, then reverse each row).
    pub fn rotate_cw(&self) -> Self {
        let h = self.height as usize;
        let w = self.width as usize;
        let mut rows = [[false; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

        // new[r][c] = old[h - 1 - c][r]
        for (r, row) in rows.iter_mut().enumerate().take(w) {
            for (c, cell) in row.iter_mut().enumerate().take(h) {
                *cell = self.rows[h - 1 - c][r];
            }
        }

        Self {
            rows,
            width: self.height,
            height: self.width,
        }
    }
}

/// The single falling piece.
///
/// `row` may be negative: pieces spawn partially above the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// Create a piece of `kind` at the spawn position.
    ///
    /// The piece starts at row -2 and is centered horizontally:
    /// `floor(COLS / 2) - ceil(width / 2)`.
    pub fn spawn(kind: PieceKind) -> Self {
        let shape = Shape::of(kind);
        let half_width = shape.width().div_ceil(2);
        Self {
            kind,
            shape,
            row: SPAWN_ROW,
            col: (BOARD_WIDTH / 2) as i8 - half_width as i8,
        }
    }

    /// Copy of this piece shifted by (d_col, d_row)
    pub fn translated(&self, d_col: i8, d_row: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
            ..*self
        }
    }

    /// Copy of this piece with its shape turned clockwise, origin unchanged
    pub fn rotated(&self) -> Self {
        Self {
            shape: self.shape.rotate_cw(),
            ..*self
        }
    }

    /// Absolute (row, col) positions of the filled cells
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(r, c)| (self.row + r, self.col + c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_shape_has_four_cells() {
        for kind in PieceKind::ALL {
            assert_eq!(Shape::of(kind).cells().count(), 4, "{kind:?}");
        }
    }

    #[test]
    fn rotate_swaps_dimensions() {
        let i = Shape::of(PieceKind::I);
        assert_eq!((i.width(), i.height()), (4, 1));
        let r = i.rotate_cw();
        assert_eq!((r.width(), r.height()), (1, 4));
    }

    #[test]
    fn t_rotates_clockwise() {
        let t = Shape::of(PieceKind::T).rotate_cw();
        let expected = Shape::from_bits(&[&[1, 0], &[1, 1], &[1, 0]]);
        assert_eq!(t, expected);
    }

    #[test]
    fn spawn_centers_piece() {
        // floor(10 / 2) - ceil(w / 2)
        assert_eq!(ActivePiece::spawn(PieceKind::I).col, 3);
        assert_eq!(ActivePiece::spawn(PieceKind::O).col, 4);
        assert_eq!(ActivePiece::spawn(PieceKind::T).col, 3);
        assert_eq!(ActivePiece::spawn(PieceKind::T).row, -2);
    }
}
