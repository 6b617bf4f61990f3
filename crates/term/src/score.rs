//! Score display: draws the score text and tracks when it changes.
//!
//! The front end keeps one `ScoreDisplay` per session and feeds it the score
//! after every transition; the game view draws the text itself each frame.

use crate::fb::{CellStyle, FrameBuffer};

#[derive(Debug, Clone, Default)]
pub struct ScoreDisplay {
    shown: Option<u32>,
}

impl ScoreDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `score` as current. Returns true when it differs from what was
    /// shown before (always true the first time).
    pub fn update(&mut self, score: u32) -> bool {
        if self.shown == Some(score) {
            return false;
        }
        self.shown = Some(score);
        true
    }

    pub fn shown(&self) -> Option<u32> {
        self.shown
    }

    /// Draw the label with `score` on the line below it.
    pub fn draw(
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        score: u32,
        label: CellStyle,
        value: CellStyle,
    ) {
        fb.put_str(x, y, "SCORE", label);
        fb.put_u32(x, y.saturating_add(1), score, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_only_changes() {
        let mut display = ScoreDisplay::new();
        assert!(display.update(0));
        assert!(!display.update(0));
        assert!(display.update(40));
        assert!(!display.update(40));
        // restart back to zero is a change too
        assert!(display.update(0));
        assert_eq!(display.shown(), Some(0));
    }
}
