//! Game loop for the core state machine.
//!
//! The core only knows about discrete ticks and actions. This crate decides
//! when gravity ticks happen: a [`TickSource`] supplies them (a wall-clock
//! interval in play, a manual counter in tests) and [`GameLoop`] feeds them
//! and player actions into a [`GameState`](term_tetris_core::GameState),
//! cancelling the timer on game over and re-arming it on restart.

pub mod game_loop;
pub mod scheduler;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use game_loop::{advance, GameLoop};
pub use scheduler::{IntervalTicker, ManualTicker, TickSource};
