//! Read-only view of a game for renderers.

use crate::board::{BOARD_COLS, BOARD_ROWS};
use crate::pieces::ActivePiece;
use crate::types::{Cell, PieceKind};

/// Everything a renderer needs for one frame.
///
/// `active` is `None` once the game is over: the piece that failed to spawn is
/// not drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_COLS]; BOARD_ROWS],
    pub active: Option<ActivePiece>,
    pub next: PieceKind,
    pub score: u32,
    pub lines: u32,
    pub game_over: bool,
    pub episode_id: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_COLS]; BOARD_ROWS],
            active: None,
            next: PieceKind::I,
            score: 0,
            lines: 0,
            game_over: false,
            episode_id: 0,
        }
    }
}
