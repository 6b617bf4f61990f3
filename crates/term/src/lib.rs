//! Terminal "game renderer" crate.
//!
//! A small, game-oriented rendering layer: the game view draws a snapshot into
//! a framebuffer of styled cells, and the terminal renderer flushes only the
//! cells that changed since the previous frame.
//!
//! - `core` stays deterministic and knows nothing about terminals
//! - one board cell is a fixed block of characters (2x1 by default, which
//!   roughly squares up typical terminal glyphs)

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod score;

pub use term_tetris_core as core;
pub use term_tetris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{piece_color, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use score::ScoreDisplay;
