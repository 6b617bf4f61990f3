//! Board tests - grid access, locking and line clearing

use term_tetris::core::{ActivePiece, Board, Shape};
use term_tetris::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

const LAST_ROW: i8 = BOARD_HEIGHT as i8 - 1;

fn fill_row(board: &mut Board, row: i8, kind: PieceKind) {
    for col in 0..BOARD_WIDTH as i8 {
        board.set(row, col, Some(kind));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert!(board.is_empty());

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(row, col), Some(None));
        }
    }
}

#[test]
fn test_board_out_of_bounds() {
    let mut board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(board.get(0, BOARD_WIDTH as i8), None);

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_WIDTH as i8, Some(PieceKind::T)));
    assert!(board.is_empty());
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(10, 5, Some(PieceKind::T)));
    assert_eq!(board.get(10, 5), Some(Some(PieceKind::T)));
    assert!(board.is_occupied(10, 5));

    assert!(board.set(10, 5, None));
    assert!(!board.is_occupied(10, 5));
}

#[test]
fn test_lock_never_writes_above_grid() {
    let mut board = Board::new();
    // Vertical I with its top two cells above the grid.
    let piece = ActivePiece {
        kind: PieceKind::I,
        shape: Shape::of(PieceKind::I).rotate_cw(),
        row: -2,
        col: 0,
    };

    assert_eq!(board.lock_piece(&piece), 2);
    assert_eq!(board.get(0, 0), Some(Some(PieceKind::I)));
    assert_eq!(board.get(1, 0), Some(Some(PieceKind::I)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_lock_entirely_above_grid_leaves_board_unchanged() {
    let mut board = Board::new();
    let piece = ActivePiece::spawn(PieceKind::O);
    assert_eq!(piece.row, -2);

    assert_eq!(board.lock_piece(&piece), 0);
    assert!(board.is_empty());
}

#[test]
fn test_clear_single_row_preserves_order() {
    let mut board = Board::new();
    board.set(16, 2, Some(PieceKind::J));
    board.set(17, 3, Some(PieceKind::L));
    board.set(18, 4, Some(PieceKind::S));
    fill_row(&mut board, LAST_ROW, PieceKind::I);

    let before: Vec<Vec<_>> = (0..19).map(|r| board.row(r).to_vec()).collect();

    let cleared = board.clear_full_rows();
    assert_eq!(cleared.len(), 1);

    // Exactly one empty row entered at the top; everything else moved down one.
    assert!(board.row(0).iter().all(|c| c.is_none()));
    for (r, row) in before.iter().enumerate() {
        assert_eq!(board.row(r + 1), row.as_slice(), "row {}", r + 1);
    }
}

#[test]
fn test_clear_non_adjacent_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 19, PieceKind::I);
    board.set(18, 0, Some(PieceKind::T));
    fill_row(&mut board, 17, PieceKind::Z);

    let cleared = board.clear_full_rows();

    assert_eq!(cleared.len(), 2);
    assert_eq!(board.filled_count(), 1);
    assert_eq!(board.get(19, 0), Some(Some(PieceKind::T)));
}

#[test]
fn test_partial_rows_are_kept() {
    let mut board = Board::new();
    for col in 0..BOARD_WIDTH as i8 - 1 {
        board.set(LAST_ROW, col, Some(PieceKind::O));
    }

    assert!(!board.is_row_full(LAST_ROW as usize));
    assert!(board.clear_full_rows().is_empty());
    assert_eq!(board.filled_count(), BOARD_WIDTH as usize - 1);
}
