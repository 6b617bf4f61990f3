//! Tick sources: where gravity ticks come from.

use std::time::{Duration, Instant};

/// A single-threaded source of gravity ticks.
///
/// A source is either armed (producing ticks) or cancelled. Polling never
/// blocks; callers use [`TickSource::time_until_next`] to decide how long to
/// wait for input.
pub trait TickSource {
    /// Whether a tick is due at `now`. A due tick is consumed by this call.
    fn poll_tick(&mut self, now: Instant) -> bool;

    /// Time left until the next tick, or `None` while cancelled.
    fn time_until_next(&self, now: Instant) -> Option<Duration>;

    /// Start (or restart) producing ticks from `now`.
    fn arm(&mut self, now: Instant);

    /// Stop producing ticks until the next [`TickSource::arm`].
    fn cancel(&mut self);

    fn is_armed(&self) -> bool;
}

/// Fixed-interval wall-clock ticker.
///
/// Fires at most once per poll: a late poll produces one tick and the next
/// deadline is measured from that poll, so a stalled loop never bursts.
#[derive(Debug, Clone)]
pub struct IntervalTicker {
    interval: Duration,
    deadline: Option<Instant>,
}

impl IntervalTicker {
    /// Create a cancelled ticker. Zero intervals are raised to 1ms.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            deadline: None,
        }
    }

    pub fn from_millis(ms: u64) -> Self {
        Self::new(Duration::from_millis(ms))
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl TickSource for IntervalTicker {
    fn poll_tick(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.interval);
    }

    fn cancel(&mut self) {
        self.deadline = None;
    }

    fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }
}

/// Synthetic ticks for tests and replays: ticks are queued by hand and
/// wall-clock time is ignored.
#[derive(Debug, Clone, Default)]
pub struct ManualTicker {
    pending: u32,
    armed: bool,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `n` ticks. They are only delivered while armed.
    pub fn push(&mut self, n: u32) {
        self.pending = self.pending.saturating_add(n);
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }
}

impl TickSource for ManualTicker {
    fn poll_tick(&mut self, _now: Instant) -> bool {
        if !self.armed || self.pending == 0 {
            return false;
        }
        self.pending -= 1;
        true
    }

    fn time_until_next(&self, _now: Instant) -> Option<Duration> {
        match (self.armed, self.pending) {
            (false, _) => None,
            (true, 0) => Some(Duration::MAX),
            (true, _) => Some(Duration::ZERO),
        }
    }

    fn arm(&mut self, _now: Instant) {
        self.armed = true;
    }

    /// Cancelling also drops queued ticks, like clearing an interval timer.
    fn cancel(&mut self) {
        self.armed = false;
        self.pending = 0;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}
