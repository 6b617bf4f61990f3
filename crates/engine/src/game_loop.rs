//! GameLoop: drives a `GameState` from a tick source and player actions.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::core::{GameState, PieceRandomizer, PieceSource};
use crate::scheduler::{IntervalTicker, TickSource};
use crate::types::{GameAction, LockEvent};

/// Poll timeout used while no tick is scheduled (game over).
const IDLE_POLL: Duration = Duration::from_millis(250);

/// One gravity step in value-passing form.
///
/// Handy for replaying a game with synthetic ticks:
/// `(0..n).fold(state, |s, _| advance(s))`.
pub fn advance<S: PieceSource>(mut state: GameState<S>) -> GameState<S> {
    state.tick();
    state
}

/// Owns the game state and its gravity timer.
///
/// The timer runs while the game is playing, is cancelled on game over and
/// re-armed by a successful restart.
#[derive(Debug, Clone)]
pub struct GameLoop<T = IntervalTicker, S = PieceRandomizer> {
    state: GameState<S>,
    ticker: T,
}

impl<T: TickSource, S: PieceSource> GameLoop<T, S> {
    /// Wrap `state` and arm the ticker from `now`.
    pub fn new(state: GameState<S>, mut ticker: T, now: Instant) -> Self {
        if state.is_game_over() {
            ticker.cancel();
        } else {
            ticker.arm(now);
        }
        Self { state, ticker }
    }

    pub fn state(&self) -> &GameState<S> {
        &self.state
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn ticker_mut(&mut self) -> &mut T {
        &mut self.ticker
    }

    /// How long the caller may wait for input before the next tick is due.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        self.ticker.time_until_next(now).unwrap_or(IDLE_POLL)
    }

    /// Run a gravity tick if one is due. Returns true if the state changed.
    pub fn on_tick(&mut self, now: Instant) -> bool {
        if !self.ticker.poll_tick(now) {
            return false;
        }
        self.state.tick();
        self.after_transition();
        true
    }

    /// Apply a player action. Returns true if the state changed.
    pub fn on_action(&mut self, action: GameAction, now: Instant) -> bool {
        let changed = self.state.apply_action(action);
        if !changed {
            return false;
        }

        if action == GameAction::Restart {
            self.ticker.cancel();
            self.ticker.arm(now);
            info!(episode = self.state.episode_id(), "game restarted");
        }
        self.after_transition();
        true
    }

    fn after_transition(&mut self) {
        let Some(event) = self.state.take_last_event() else {
            return;
        };
        log_lock(&event, self.state.score());

        if event.game_over {
            self.ticker.cancel();
            info!(
                score = self.state.score(),
                lines = self.state.lines(),
                "game over"
            );
        }
    }
}

fn log_lock(event: &LockEvent, score: u32) {
    if event.lines_cleared > 0 {
        debug!(
            piece = event.kind.letter(),
            lines = event.lines_cleared,
            delta = event.score_delta,
            score,
            "lines cleared"
        );
    } else {
        debug!(piece = event.kind.letter(), "piece locked");
    }
}
