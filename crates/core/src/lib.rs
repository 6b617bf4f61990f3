//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and state. It has no dependencies on
//! rendering, terminals or timers, which makes it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every transition is a plain method call on [`GameState`]
//! - **Portable**: any front end can drive it with ticks and actions
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid, locking and line clearing
//! - [`pieces`]: tetromino shape matrices, rotation and the active piece
//! - [`collision`]: wall, floor and stack collision tests
//! - [`scoring`]: classic line-clear awards
//! - [`rng`]: seeded uniform piece selection
//! - [`game_state`]: the game state machine (`Playing` / `GameOver`)
//! - [`snapshot`]: read-only frame data for renderers
//!
//! # Example
//!
//! ```
//! use term_tetris_core::GameState;
//! use term_tetris_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Nothing to clear yet on an empty board.
//! assert_eq!(game.score(), 0);
//! assert!(!game.is_game_over());
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use term_tetris_types as types;

pub use board::{Board, ClearedRows, BOARD_COLS, BOARD_ROWS};
pub use collision::{collides, fits};
pub use game_state::GameState;
pub use pieces::{ActivePiece, Shape};
pub use rng::{PieceRandomizer, PieceSource, ScriptedPieces};
pub use scoring::line_clear_score;
pub use snapshot::GameSnapshot;
