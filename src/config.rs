//! Command-line and environment configuration for the `term-tetris` binary.

use std::path::PathBuf;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::Parser;

use crate::types::DROP_INTERVAL_MS;

/// Terminal Tetris - arrows move and rotate, space drops, R restarts, Q quits
#[derive(Debug, Clone, Parser)]
#[command(name = "term-tetris", version, long_about = None)]
pub struct Config {
    /// Seed for piece selection (defaults to the current time)
    #[arg(long, env = "TETRIS_SEED")]
    pub seed: Option<u64>,

    /// Gravity interval in milliseconds
    #[arg(
        long,
        env = "TETRIS_DROP_MS",
        default_value_t = DROP_INTERVAL_MS as u64,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub drop_interval_ms: u64,

    /// Width of one board cell in terminal columns
    #[arg(
        long,
        env = "TETRIS_CELL_W",
        default_value_t = 2,
        value_parser = clap::value_parser!(u16).range(1..=8)
    )]
    pub cell_width: u16,

    /// Height of one board cell in terminal rows
    #[arg(
        long,
        env = "TETRIS_CELL_H",
        default_value_t = 1,
        value_parser = clap::value_parser!(u16).range(1..=4)
    )]
    pub cell_height: u16,

    /// Write logs to this file. The terminal itself is never logged to.
    #[arg(long, env = "TETRIS_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Config {
    /// The configured seed, or one derived from the wall clock.
    pub fn resolved_seed(&self) -> u64 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or(1)
        })
    }

    pub fn drop_interval(&self) -> Duration {
        Duration::from_millis(self.drop_interval_ms)
    }
}
