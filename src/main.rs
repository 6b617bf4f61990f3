//! Terminal Tetris runner.
//!
//! Polls crossterm for key events with a timeout that ends at the next
//! gravity tick, applies actions and ticks to the game loop, and redraws
//! after every change.

use std::fs::File;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use term_tetris::config::Config;
use term_tetris::core::GameState;
use term_tetris::engine::{GameLoop, IntervalTicker};
use term_tetris::input::{handle_key_event, should_quit};
use term_tetris::term::{FrameBuffer, GameView, ScoreDisplay, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = Config::parse();
    init_logging(&config)?;

    // Leave the alternate screen before the panic message is printed.
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = TerminalRenderer::new().exit();
        original_hook(panic_info);
    }));

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to the configured file only; the terminal belongs to the game.
fn init_logging(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &Config) -> Result<()> {
    let seed = config.resolved_seed();
    info!(seed, interval_ms = config.drop_interval_ms, "starting game");

    let ticker = IntervalTicker::new(config.drop_interval());
    let mut game = GameLoop::new(GameState::new(seed), ticker, Instant::now());

    let view = GameView::new(config.cell_width, config.cell_height);
    let mut fb = FrameBuffer::new(0, 0);
    let mut score = ScoreDisplay::new();
    let mut dirty = true;

    loop {
        if dirty {
            let state = game.state();
            if score.update(state.score()) {
                debug!(score = state.score(), "score changed");
            }

            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&state.snapshot(), Viewport::new(w, h), &mut fb);
            term.draw(&fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        if event::poll(game.poll_timeout(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(score = game.state().score(), "quit");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        dirty |= game.on_action(action, Instant::now());
                    }
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        dirty |= game.on_tick(Instant::now());
    }
}
