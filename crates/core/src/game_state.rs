//! Game state module - manages the complete game state
//!
//! Ties together the board, the active piece, the piece source and scoring.
//! Every transition is synchronous: gravity ticks and player actions each run
//! to completion and leave the state consistent for rendering.
//!
//! While the phase is `Playing` the active piece never overlaps a locked cell.

use crate::board::Board;
use crate::collision::{collides, fits};
use crate::pieces::ActivePiece;
use crate::rng::{PieceRandomizer, PieceSource};
use crate::scoring::line_clear_score;
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, GamePhase, LockEvent, PieceKind};

/// Wall kick offsets tried in order when a rotation collides in place
const ROTATION_KICKS: [i8; 3] = [0, -1, 1];

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = PieceRandomizer> {
    board: Board,
    active: ActivePiece,
    next: PieceKind,
    pieces: S,
    score: u32,
    lines: u32,
    phase: GamePhase,
    /// Monotonic game id (increments on restart).
    episode_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
}

impl GameState<PieceRandomizer> {
    /// Create a new game whose piece sequence is determined by `seed`
    pub fn new(seed: u64) -> Self {
        Self::with_source(PieceRandomizer::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a new game drawing pieces from `pieces`.
    ///
    /// Two pieces are drawn up front: the active one and the preview.
    pub fn with_source(mut pieces: S) -> Self {
        let active = ActivePiece::spawn(pieces.next_kind());
        let next = pieces.next_kind();

        Self {
            board: Board::new(),
            active,
            next,
            pieces,
            score: 0,
            lines: 0,
            phase: GamePhase::Playing,
            episode_id: 0,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for scripted setups (tests, benches, demos)
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    /// Replace the active piece.
    ///
    /// Rejected (returns false) when the piece would overlap the board or the
    /// game is over, so the no-overlap invariant holds.
    pub fn set_active(&mut self, piece: ActivePiece) -> bool {
        if self.phase.is_over() || !fits(&self.board, &piece) {
            return false;
        }
        self.active = piece;
        true
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase.is_over()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn last_event(&self) -> Option<LockEvent> {
        self.last_event
    }

    /// Take the last lock event, leaving `None` behind
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Apply a player action. Returns true if the state changed.
    ///
    /// While the game is over only `Restart` does anything; while playing
    /// `Restart` is ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => self.restart(),
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop().is_some(),
            GameAction::Rotate => self.try_rotate(),
        }
    }

    /// Try to move the active piece. Returns false (and changes nothing) when
    /// the target position collides or the game is over.
    pub fn try_move(&mut self, d_col: i8, d_row: i8) -> bool {
        if self.phase.is_over() || collides(&self.board, &self.active, d_col, d_row) {
            return false;
        }
        self.active = self.active.translated(d_col, d_row);
        true
    }

    /// Rotate the active piece clockwise.
    ///
    /// Tries the rotated shape in place, then one column left, then one column
    /// right. If none fit the piece keeps its old shape.
    pub fn try_rotate(&mut self) -> bool {
        if self.phase.is_over() {
            return false;
        }

        let rotated = self.active.rotated();
        for d_col in ROTATION_KICKS {
            if !collides(&self.board, &rotated, d_col, 0) {
                self.active = rotated.translated(d_col, 0);
                return true;
            }
        }
        false
    }

    /// One gravity step: move down a row, or lock when blocked.
    pub fn tick(&mut self) {
        self.step_down();
    }

    /// Player soft drop. Same as a gravity step, but reports whether anything
    /// happened so callers can skip a redraw in the game-over phase.
    pub fn soft_drop(&mut self) -> bool {
        self.step_down()
    }

    fn step_down(&mut self) -> bool {
        if self.phase.is_over() {
            return false;
        }
        if !self.try_move(0, 1) {
            self.lock_piece();
        }
        true
    }

    /// Drop the active piece as far as it goes and lock it.
    ///
    /// Returns the number of rows dropped, or `None` if the game is over.
    pub fn hard_drop(&mut self) -> Option<u32> {
        if self.phase.is_over() {
            return None;
        }

        let mut distance = 0;
        while self.try_move(0, 1) {
            distance += 1;
        }
        self.lock_piece();
        Some(distance)
    }

    /// Lock the active piece, clear lines, score them and spawn the next piece.
    ///
    /// Moves to `GameOver` if the locked piece had no cell inside the visible
    /// grid (it topped out above row 0). Every standard shape is at most two
    /// rows tall and spawns at row -2, so a fresh piece never overlaps the
    /// stack: the spawn check in `spawn_next` cannot fire with these shapes.
    pub fn lock_piece(&mut self) {
        if self.phase.is_over() {
            return;
        }

        let locked = self.active;
        let written = self.board.lock_piece(&locked);

        let cleared = self.board.clear_full_rows().len();
        let score_delta = line_clear_score(cleared);
        self.score = self.score.saturating_add(score_delta);
        self.lines = self.lines.saturating_add(cleared as u32);

        let spawned = self.spawn_next();
        if written == 0 {
            self.phase = GamePhase::GameOver;
        }
        let game_over = !spawned || written == 0;

        self.last_event = Some(LockEvent {
            kind: locked.kind,
            lines_cleared: cleared as u32,
            score_delta,
            game_over,
        });
    }

    /// Promote the preview piece to active and draw a new preview.
    ///
    /// Returns false (and ends the game) if the new piece does not fit.
    fn spawn_next(&mut self) -> bool {
        self.active = ActivePiece::spawn(self.next);
        self.next = self.pieces.next_kind();

        if !fits(&self.board, &self.active) {
            self.phase = GamePhase::GameOver;
            return false;
        }
        true
    }

    /// Start a fresh game after game over.
    ///
    /// Clears the board, resets the score and draws two fresh pieces. Returns
    /// false (and does nothing) while the game is still being played.
    pub fn restart(&mut self) -> bool {
        if !self.phase.is_over() {
            return false;
        }

        self.board.clear();
        self.score = 0;
        self.lines = 0;
        self.active = ActivePiece::spawn(self.pieces.next_kind());
        self.next = self.pieces.next_kind();
        self.phase = GamePhase::Playing;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.last_event = None;
        true
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = (!self.phase.is_over()).then_some(self.active);
        out.next = self.next;
        out.score = self.score;
        out.lines = self.lines;
        out.game_over = self.phase.is_over();
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}
