//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no external dependencies, so it can be
//! shared by the game core, the game loop, input mapping and rendering.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn row**: -2, so a fresh piece starts partially above the visible grid
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DROP_INTERVAL_MS` | 1000 | Fixed gravity interval |
//!
//! There are no levels: gravity stays at a fixed interval for the whole game.
//!
//! # Examples
//!
//! ```
//! use term_tetris_types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::ALL.len(), 7);
//! assert!(!GamePhase::default().is_over());
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Row at which new pieces spawn. Negative rows are above the visible grid.
pub const SPAWN_ROW: i8 = -2;

/// Gravity interval in milliseconds (one row per second)
pub const DROP_INTERVAL_MS: u32 = 1000;

/// Line clear awards for 0..=4 lines cleared by a single lock.
///
/// Counts above 4 cannot happen with a single tetromino on this board; callers
/// clamp to the last entry.
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
///
/// The kind doubles as the color id of a locked cell:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in canonical order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Uppercase single-letter name, as shown in the side panel.
    pub fn letter(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Locked cell, colored by the piece that filled it
pub type Cell = Option<PieceKind>;

/// Discrete player actions.
///
/// Gravity is not an action; it is driven by the game loop's timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down; locks the piece when blocked
    SoftDrop,
    /// Drop piece as far as it goes and lock it immediately
    HardDrop,
    /// Rotate piece 90° clockwise, with a one-column wall kick
    Rotate,
    /// Start a fresh game (only honored after game over)
    Restart,
}

/// Top-level game phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GamePhase {
    #[default]
    Playing,
    GameOver,
}

impl GamePhase {
    pub fn is_over(&self) -> bool {
        matches!(self, GamePhase::GameOver)
    }
}

/// Core-side event emitted after a piece locks.
///
/// Consumed by the game loop (logging) and left on the state for observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    pub score_delta: u32,
    /// The lock ended the game: the piece topped out above the grid or the
    /// next piece had no room to spawn.
    pub game_over: bool,
}
