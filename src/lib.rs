//! Terminal Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof as
//! `term_tetris::{core, engine, input, term, types}`, and hosts the binary's
//! configuration so it can be tested like any other module.

pub mod config;

pub use term_tetris_core as core;
pub use term_tetris_engine as engine;
pub use term_tetris_input as input;
pub use term_tetris_term as term;
pub use term_tetris_types as types;
